//! Vectorized arithmetic expressions.
//!
//! The expression language the embedded evaluator accepts: numeric
//! literals, identifiers, `+ - * / ^`, unary minus and parentheses,
//! evaluated elementwise over named `f64` vectors. `^` binds tightest and
//! associates to the right, so `-x^2` is `-(x^2)` and `2^3^2` is `2^(3^2)`.
//! A length-1 operand is recycled across the other operand's length; any
//! other length mismatch is non-conformable and fails the evaluation.

use std::collections::HashMap;
use std::fmt;

use crate::error::EvalError;

/// Named vectors visible to an expression.
pub type Bindings = HashMap<String, Vec<f64>>;

/// Parsed expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Variable(String),
    Neg(Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    /// Left and right binding powers. `Pow` has its right power below its
    /// left, which makes it right-associative.
    fn binding_power(self) -> (u8, u8) {
        match self {
            BinaryOp::Add | BinaryOp::Sub => (1, 2),
            BinaryOp::Mul | BinaryOp::Div => (3, 4),
            BinaryOp::Pow => (8, 7),
        }
    }

    fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => a / b,
            BinaryOp::Pow => a.powf(b),
        }
    }
}

// Unary minus binds looser than `^` and tighter than `* /`.
const NEG_BINDING_POWER: u8 = 5;

/// Parses an expression from source text.
pub fn parse(input: &str) -> Result<Expr, EvalError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.expression(0)?;
    match parser.next() {
        None => Ok(expr),
        Some(token) => Err(EvalError::UnexpectedToken(token.to_string())),
    }
}

impl Expr {
    /// Evaluates the expression elementwise against `env`.
    pub fn eval(&self, env: &Bindings) -> Result<Vec<f64>, EvalError> {
        match self {
            Expr::Number(n) => Ok(vec![*n]),
            Expr::Variable(name) => env
                .get(name)
                .cloned()
                .ok_or_else(|| EvalError::UnboundVariable(name.clone())),
            Expr::Neg(inner) => Ok(inner.eval(env)?.iter().map(|v| -v).collect()),
            Expr::Binary(op, lhs, rhs) => combine(*op, &lhs.eval(env)?, &rhs.eval(env)?),
        }
    }
}

/// Combines two operand vectors elementwise, recycling a length-1 operand.
fn combine(op: BinaryOp, lhs: &[f64], rhs: &[f64]) -> Result<Vec<f64>, EvalError> {
    match (lhs.len(), rhs.len()) {
        (_, 1) => Ok(lhs.iter().map(|&a| op.apply(a, rhs[0])).collect()),
        (1, _) => Ok(rhs.iter().map(|&b| op.apply(lhs[0], b)).collect()),
        (left, right) if left == right => Ok(lhs
            .iter()
            .zip(rhs.iter())
            .map(|(&a, &b)| op.apply(a, b))
            .collect()),
        (left, right) => Err(EvalError::NonConformable { left, right }),
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Ident(name) => f.write_str(name),
            Token::Plus => f.write_str("+"),
            Token::Minus => f.write_str("-"),
            Token::Star => f.write_str("*"),
            Token::Slash => f.write_str("/"),
            Token::Caret => f.write_str("^"),
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();
    while let Some(&(start, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            '*' => {
                chars.next();
                tokens.push(Token::Star);
            }
            '/' => {
                chars.next();
                tokens.push(Token::Slash);
            }
            '^' => {
                chars.next();
                tokens.push(Token::Caret);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            c if c.is_ascii_digit() || c == '.' => {
                let mut end = start;
                while let Some(&(i, d)) = chars.peek() {
                    if d.is_ascii_digit() || d == '.' {
                        end = i;
                        chars.next();
                    } else {
                        break;
                    }
                }
                let text = &input[start..=end];
                let value = text
                    .parse()
                    .map_err(|_| EvalError::InvalidNumber(text.to_owned()))?;
                tokens.push(Token::Number(value));
            }
            c if c.is_alphabetic() || c == '_' => {
                let mut end = start;
                while let Some(&(i, d)) = chars.peek() {
                    if d.is_alphanumeric() || d == '_' || d == '.' {
                        end = i;
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Ident(input[start..=end].to_owned()));
            }
            c => return Err(EvalError::UnexpectedChar(c)),
        }
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Pratt expression parser over `min_bp`.
    fn expression(&mut self, min_bp: u8) -> Result<Expr, EvalError> {
        let mut lhs = match self.next() {
            Some(Token::Number(n)) => Expr::Number(n),
            Some(Token::Ident(name)) => Expr::Variable(name),
            Some(Token::Minus) => Expr::Neg(Box::new(self.expression(NEG_BINDING_POWER)?)),
            Some(Token::LParen) => {
                let inner = self.expression(0)?;
                match self.next() {
                    Some(Token::RParen) => inner,
                    Some(token) => return Err(EvalError::UnexpectedToken(token.to_string())),
                    None => return Err(EvalError::UnexpectedEnd),
                }
            }
            Some(token) => return Err(EvalError::UnexpectedToken(token.to_string())),
            None => return Err(EvalError::UnexpectedEnd),
        };
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Sub,
                Some(Token::Star) => BinaryOp::Mul,
                Some(Token::Slash) => BinaryOp::Div,
                Some(Token::Caret) => BinaryOp::Pow,
                _ => break,
            };
            let (left_bp, right_bp) = op.binding_power();
            if left_bp < min_bp {
                break;
            }
            self.next();
            let rhs = self.expression(right_bp)?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }
}
