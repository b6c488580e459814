//! Data models for coin-charts commands and services

pub mod chart;
pub mod outcome;

pub use chart::{PriceSeries, DATE_FORMAT};
pub use outcome::{ChartOutcome, Report};
