use serde::Deserialize;
use thiserror::Error;

/// Response from GET /coins/{id}/market_chart
///
/// Only the price series is kept. `market_caps` and `total_volumes` are
/// returned by the API as well but nothing here charts them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketChart {
    /// `[timestamp_ms, price]` pairs, oldest first
    #[serde(default)]
    pub prices: Vec<(f64, f64)>,
}

/// Error type for CoinGecko API operations
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response, with the raw body for diagnostics
    #[error("HTTP Error ({status}): {body}")]
    Http { status: u16, body: String },
    /// Network/request error
    #[error("Request Error: {0}")]
    Request(String),
    /// Body was not the expected JSON
    #[error("Deserialization Error: {0}")]
    Deserialization(String),
}
