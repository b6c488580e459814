pub mod price_chart;
pub mod dominance_chart;
