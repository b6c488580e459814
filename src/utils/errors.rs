use thiserror::Error;
use crate::api::coingecko::ApiError;

/// Errors surfaced by chart commands and services
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("Value and date series differ in length ({values} values, {dates} dates)")]
    MismatchedSeries { values: usize, dates: usize },
    #[error("Cannot render an empty series")]
    EmptySeries,
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Timestamp {0} ms is out of range")]
    InvalidTimestamp(i64),
    #[error("Failed to render chart: {0}")]
    Render(String),
}
