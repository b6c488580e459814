pub mod chart_service;
pub mod price_service;
pub mod sample_service;

pub use chart_service::{render_line_chart, ChartStyle};
