//! Invocation request and response envelopes.

use serde::{Deserialize, Serialize};

/// Payload of a single invocation.
///
/// `x` and `y` are assumed to be of equal length; the handler never checks.
/// A mismatch surfaces as an evaluator error instead.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct StatsRequest {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Successful answer, one statistic per input pair.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatsResponse {
    pub statistics_list: Vec<f64>,
}
