//! A Lambda function that computes elementwise sums of squares.
//!
//! Each invocation carries two equal-length numeric sequences `x` and `y`.
//! The handler binds them into an embedded numeric evaluator, evaluates the
//! fixed expression `x^2 + y^2` and answers with
//! `{ "statistics_list": [...] }`. When the evaluator signals a failure the
//! handler answers with a [`StatisticsError`], whose `Display` form is the
//! JSON error envelope API Gateway parses into an HTTP 400 response. Every
//! other failure propagates untouched to the runtime's default fault
//! handling.

pub mod error;
pub mod evaluator;
pub mod expr;
pub mod handler;
pub mod init;
pub mod types;

pub use crate::error::{EvalError, StatisticsError};
pub use crate::evaluator::{NumericEvaluator, VectorEvaluator};
pub use crate::handler::{handle, handle_with};
pub use crate::types::{StatsRequest, StatsResponse};

/// Boxed error, matching the runtime's error type.
pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;
