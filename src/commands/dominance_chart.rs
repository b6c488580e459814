use tracing::info;
use crate::models::{ChartOutcome, Report};
use crate::services::{render_line_chart, sample_service, ChartStyle};
use crate::utils::{ChartError, Config};

pub const TITLE: &str = "BTC Dominance Over Time";
pub const FILENAME: &str = "btc_dominance_chart.png";

/// Render the placeholder BTC dominance series to `btc_dominance_chart.png`
pub fn execute(config: &Config) -> Result<ChartOutcome, ChartError> {
    let series = sample_service::btc_dominance_sample()?;
    let path = config.output_dir.join(FILENAME);

    info!("📈 Rendering {} sample points to {}", series.len(), path.display());
    render_line_chart(&series, TITLE, &ChartStyle::sample(), &path)?;

    Ok(ChartOutcome::Rendered { path })
}

/// Console text and exit status for a finished run
pub fn report(result: &Result<ChartOutcome, ChartError>) -> Report {
    match result {
        Ok(ChartOutcome::Rendered { path }) => Report::success(format!("{}", path.display())),
        Ok(other) => Report::failure(format!("Unexpected outcome: {:?}", other)),
        Err(e) => Report::failure(format!("Dominance chart failed: {}", e)),
    }
}
