use crate::models::PriceSeries;
use crate::utils::errors::ChartError;

/// Placeholder BTC dominance readings (percent), one per month.
/// Stand-in until a real dominance source is wired up.
pub const BTC_DOMINANCE: [f64; 6] = [60.0, 58.0, 62.0, 63.0, 61.0, 60.0];

pub const BTC_DOMINANCE_DATES: [&str; 6] = [
    "2024-02-01",
    "2024-03-01",
    "2024-04-01",
    "2024-05-01",
    "2024-06-01",
    "2024-07-01",
];

pub fn btc_dominance_sample() -> Result<PriceSeries, ChartError> {
    PriceSeries::from_date_strings(BTC_DOMINANCE.to_vec(), &BTC_DOMINANCE_DATES)
}
