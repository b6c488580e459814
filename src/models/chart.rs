//! Chart data models

use chrono::NaiveDate;
use crate::utils::errors::ChartError;

/// Date format used for parsing sample data and for axis labels
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Prices and the calendar dates they were sampled on, positionally aligned.
///
/// Values may repeat (flat periods); order is chronological as supplied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    values: Vec<f64>,
    dates: Vec<NaiveDate>,
}

impl PriceSeries {
    pub fn new(values: Vec<f64>, dates: Vec<NaiveDate>) -> Result<Self, ChartError> {
        if values.len() != dates.len() {
            return Err(ChartError::MismatchedSeries {
                values: values.len(),
                dates: dates.len(),
            });
        }
        Ok(Self { values, dates })
    }

    /// Build a series from `YYYY-MM-DD` date strings
    pub fn from_date_strings(values: Vec<f64>, dates: &[&str]) -> Result<Self, ChartError> {
        let parsed = dates
            .iter()
            .map(|d| {
                NaiveDate::parse_from_str(d, DATE_FORMAT)
                    .map_err(|_| ChartError::InvalidDate(d.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(values, parsed)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Dates rendered as `YYYY-MM-DD`
    pub fn labels(&self) -> Vec<String> {
        self.dates
            .iter()
            .map(|d| d.format(DATE_FORMAT).to_string())
            .collect()
    }
}
