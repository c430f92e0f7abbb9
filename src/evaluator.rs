//! The numeric evaluation capability.
//!
//! [`NumericEvaluator`] is the seam between the handler and whatever engine
//! runs the numbers, so tests can drive the handler with a fake instead of
//! a live interpreter.

use crate::error::EvalError;
use crate::expr::{self, Bindings};

/// A numeric engine that evaluates expressions over named vectors.
///
/// `Send` is required so a handler future borrowing the evaluator can move
/// across the runtime's worker threads.
pub trait NumericEvaluator: Send {
    /// Binds `values` under `name`, replacing an earlier binding.
    fn bind(&mut self, name: &str, values: Vec<f64>);

    /// Evaluates `expression` against the current bindings.
    fn evaluate(&mut self, expression: &str) -> Result<Vec<f64>, EvalError>;
}

/// In-process evaluator backed by the [`expr`] expression language.
#[derive(Debug, Default)]
pub struct VectorEvaluator {
    env: Bindings,
}

impl VectorEvaluator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NumericEvaluator for VectorEvaluator {
    fn bind(&mut self, name: &str, values: Vec<f64>) {
        self.env.insert(name.to_owned(), values);
    }

    fn evaluate(&mut self, expression: &str) -> Result<Vec<f64>, EvalError> {
        expr::parse(expression)?.eval(&self.env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_vectors_are_visible_to_expressions() {
        let mut evaluator = VectorEvaluator::new();
        evaluator.bind("x", vec![1.0, 3.0]);
        evaluator.bind("y", vec![2.0, 4.0]);
        assert_eq!(evaluator.evaluate("x^2 + y^2").unwrap(), vec![5.0, 25.0]);
    }

    #[test]
    fn rebinding_replaces_the_earlier_vector() {
        let mut evaluator = VectorEvaluator::new();
        evaluator.bind("x", vec![1.0]);
        evaluator.bind("x", vec![10.0]);
        assert_eq!(evaluator.evaluate("x + 1").unwrap(), vec![11.0]);
    }

    #[test]
    fn evaluation_errors_pass_through() {
        let mut evaluator = VectorEvaluator::new();
        assert_eq!(
            evaluator.evaluate("x").unwrap_err(),
            EvalError::UnboundVariable("x".to_owned())
        );
    }
}
