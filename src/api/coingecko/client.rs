use reqwest::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use super::models::{ApiError, MarketChart};
use tracing::debug;

/// CoinGecko public API client
pub struct CoinGeckoClient {
    http_client: HttpClient,
    base_url: String,
}

impl CoinGeckoClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.coingecko.com/api/v3";

    /// Create a new CoinGecko API client
    pub fn new() -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a new client with custom base URL (for testing or a mirror)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_http_client(HttpClient::new(), base_url)
    }

    /// Create a client around a preconfigured `reqwest::Client`
    pub fn with_http_client(http_client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn create_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// GET /coins/{id}/market_chart
    ///
    /// Retrieves historical market data for a coin over a trailing window.
    ///
    /// # Arguments
    /// * `coin_id` - CoinGecko coin id, e.g. `bitcoin`
    /// * `vs_currency` - Quote currency, e.g. `usd`
    /// * `days` - Size of the trailing window in days
    ///
    /// # Returns
    /// * `Ok(MarketChart)` - Price history, oldest first
    /// * `Err(ApiError)` - Non-2xx status, transport failure or bad body
    pub async fn get_market_chart(
        &self,
        coin_id: &str,
        vs_currency: &str,
        days: u32,
    ) -> Result<MarketChart, ApiError> {
        let url = format!("{}/coins/{}/market_chart", self.base_url, coin_id);
        let days = days.to_string();
        debug!("GET {} vs_currency={} days={}", url, vs_currency, days);

        let response = self.http_client
            .get(&url)
            .headers(Self::create_headers())
            .query(&[("vs_currency", vs_currency), ("days", days.as_str())])
            .send()
            .await
            .map_err(|e| ApiError::Request(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Http { status: status.as_u16(), body });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Request(format!("Failed to read response: {}", e)))?;

        serde_json::from_str::<MarketChart>(&body)
            .map_err(|e| ApiError::Deserialization(format!("Failed to parse response: {}", e)))
    }
}

impl Default for CoinGeckoClient {
    fn default() -> Self {
        Self::new()
    }
}
