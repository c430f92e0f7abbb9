//! Typed errors and the JSON error envelope.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Everything the numeric evaluator can signal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("unexpected character '{0}' in expression")]
    UnexpectedChar(char),
    #[error("invalid numeric literal '{0}'")]
    InvalidNumber(String),
    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("object '{0}' not found")]
    UnboundVariable(String),
    #[error("non-conformable arguments ({left} and {right})")]
    NonConformable { left: usize, right: usize },
}

/// Structured client error raised when the evaluator fails.
///
/// The `Display` form is the complete JSON envelope; the hosting gateway
/// parses it out of the raised error message and maps it to an HTTP 400
/// response. This is the only place the typed error crosses into its
/// transport shape.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatisticsError {
    #[serde(rename = "errorType")]
    error_type: &'static str,
    #[serde(rename = "httpStatus")]
    pub http_status: u16,
    pub request_id: String,
    pub message: String,
}

impl StatisticsError {
    /// Builds the envelope for one failed invocation. Multi-line evaluator
    /// messages are collapsed to a single line.
    pub fn new(request_id: impl Into<String>, message: &str) -> Self {
        StatisticsError {
            error_type: "StatisticsError",
            http_status: 400,
            request_id: request_id.into(),
            message: message.replace('\n', " "),
        }
    }
}

impl fmt::Display for StatisticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&body)
    }
}

impl std::error::Error for StatisticsError {}
