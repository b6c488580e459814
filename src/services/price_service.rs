use chrono::{Local, NaiveDate, TimeZone};
use tracing::{info, warn};
use crate::api::coingecko::{ApiError, CoinGeckoClient};
use crate::models::PriceSeries;
use crate::utils::errors::ChartError;

/// Quote currency requested from the API
pub const VS_CURRENCY: &str = "usd";

/// Trailing window requested from the API
pub const WINDOW_DAYS: u32 = 180;

/// Calendar date of an epoch-millisecond timestamp in the given time zone
pub fn day_for_timestamp<Tz: TimeZone>(timestamp_ms: i64, tz: &Tz) -> Result<NaiveDate, ChartError> {
    tz.timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|dt| dt.date_naive())
        .ok_or(ChartError::InvalidTimestamp(timestamp_ms))
}

/// Fetch the trailing USD price history for `symbol`, dated in local time.
///
/// A non-2xx response is logged and yields an empty series rather than an
/// error. Transport and parse failures are returned as errors.
pub async fn fetch_price_series(
    client: &CoinGeckoClient,
    symbol: &str,
) -> Result<PriceSeries, ChartError> {
    fetch_price_series_in(client, symbol, &Local).await
}

/// Same as [`fetch_price_series`] with dates taken in `tz`
pub async fn fetch_price_series_in<Tz: TimeZone>(
    client: &CoinGeckoClient,
    symbol: &str,
    tz: &Tz,
) -> Result<PriceSeries, ChartError> {
    let chart = match client.get_market_chart(symbol, VS_CURRENCY, WINDOW_DAYS).await {
        Ok(chart) => chart,
        Err(ApiError::Http { status, body }) => {
            warn!("Error fetching data for {}: {} - {}", symbol, status, body);
            return Ok(PriceSeries::default());
        }
        Err(e) => return Err(e.into()),
    };

    let mut values = Vec::with_capacity(chart.prices.len());
    let mut dates = Vec::with_capacity(chart.prices.len());
    for (timestamp_ms, price) in chart.prices {
        dates.push(day_for_timestamp(timestamp_ms as i64, tz)?);
        values.push(price);
    }

    info!("Fetched {} price points for {}", values.len(), symbol);
    PriceSeries::new(values, dates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use crate::models::DATE_FORMAT;
    use crate::test_support::{local_client, serve_once};

    const THREE_DAYS: &str = r#"{
        "prices": [
            [1704067200000, 42280.23],
            [1704153600000, 44187.14],
            [1704240000000, 44187.14]
        ],
        "market_caps": [],
        "total_volumes": []
    }"#;

    #[test]
    fn test_day_for_timestamp_respects_zone() {
        // 2024-01-01T23:30:00Z
        let ts = 1704151800000;
        assert_eq!(
            day_for_timestamp(ts, &Utc).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );

        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            day_for_timestamp(ts, &plus_two).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
        );
    }

    #[test]
    fn test_day_for_timestamp_out_of_range() {
        let err = day_for_timestamp(i64::MAX, &Utc).unwrap_err();
        assert!(matches!(err, ChartError::InvalidTimestamp(i64::MAX)));
    }

    #[tokio::test]
    async fn test_fetch_aligns_prices_and_dates() {
        let (base_url, _request) = serve_once("200 OK", THREE_DAYS.to_string()).await;
        let client = local_client(base_url);

        let series = fetch_price_series_in(&client, "bitcoin", &Utc).await.unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series.values(), &[42280.23, 44187.14, 44187.14]);
        assert_eq!(series.labels(), vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
    }

    #[tokio::test]
    async fn test_fetch_local_dates_are_calendar_days() {
        let (base_url, _request) = serve_once("200 OK", THREE_DAYS.to_string()).await;
        let client = local_client(base_url);

        let series = fetch_price_series(&client, "bitcoin").await.unwrap();

        assert_eq!(series.values().len(), series.dates().len());
        for label in series.labels() {
            assert_eq!(label.len(), 10);
            assert!(NaiveDate::parse_from_str(&label, DATE_FORMAT).is_ok());
        }
    }

    #[tokio::test]
    async fn test_fetch_http_error_returns_empty_series() {
        let (base_url, _request) = serve_once(
            "429 Too Many Requests",
            r#"{"status":{"error_code":429,"error_message":"rate limited"}}"#.to_string(),
        )
        .await;
        let client = local_client(base_url);

        let series = fetch_price_series(&client, "bitcoin").await.unwrap();

        assert!(series.is_empty());
        assert!(series.dates().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_without_prices_key_is_empty() {
        let (base_url, _request) = serve_once("200 OK", "{}".to_string()).await;
        let client = local_client(base_url);

        let series = fetch_price_series(&client, "bitcoin").await.unwrap();
        assert!(series.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_malformed_json_is_error() {
        let (base_url, _request) = serve_once("200 OK", r#"{"prices": [[1, "#.to_string()).await;
        let client = local_client(base_url);

        let err = fetch_price_series(&client, "bitcoin").await.unwrap_err();
        assert!(matches!(err, ChartError::Api(ApiError::Deserialization(_))));
    }
}
