//! The Lambda request handler.

use tracing::{debug, error, info};

use crate::error::{EvalError, StatisticsError};
use crate::evaluator::{NumericEvaluator, VectorEvaluator};
use crate::types::{StatsRequest, StatsResponse};

/// The fixed expression evaluated for every request.
const STATS_EXPRESSION: &str = "x^2 + y^2";

/// Binds both input vectors and evaluates the statistics expression.
pub(crate) fn calculate_stats(
    evaluator: &mut dyn NumericEvaluator,
    x: Vec<f64>,
    y: Vec<f64>,
) -> Result<Vec<f64>, EvalError> {
    evaluator.bind("x", x);
    evaluator.bind("y", y);
    debug!("calculating stats");
    let stats = evaluator.evaluate(STATS_EXPRESSION)?;
    debug!("done calculating stats");
    Ok(stats)
}

/// Handles one invocation with a fresh in-process evaluator.
///
/// No state survives the call; the answer depends only on this event's
/// `x` and `y`.
pub async fn handle(event: StatsRequest, request_id: &str) -> Result<StatsResponse, StatisticsError> {
    let mut evaluator = VectorEvaluator::new();
    handle_with(&mut evaluator, event, request_id).await
}

/// Handles one invocation against the given evaluator.
///
/// An evaluator failure is logged with the original payload and translated
/// into a [`StatisticsError`]; nothing else is caught here.
pub async fn handle_with(
    evaluator: &mut dyn NumericEvaluator,
    event: StatsRequest,
    request_id: &str,
) -> Result<StatsResponse, StatisticsError> {
    info!("length of x: {}", event.x.len());
    match calculate_stats(evaluator, event.x.clone(), event.y.clone()) {
        Ok(statistics_list) => Ok(StatsResponse { statistics_list }),
        Err(err) => {
            error!("payload: {:?}", event);
            error!("error: {}", err);
            Err(StatisticsError::new(request_id, &err.to_string()))
        }
    }
}
