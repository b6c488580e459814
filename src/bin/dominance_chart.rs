use std::process::ExitCode;
use tracing::{error, info};
use coin_charts::commands::dominance_chart;
use coin_charts::utils::{logging, Config};

fn main() -> ExitCode {
    let config = Config::from_env();
    logging::init();

    let report = dominance_chart::report(&dominance_chart::execute(&config));

    if report.is_success() {
        info!("Chart saved to {}", report.message);
    } else {
        error!("{}", report.message);
    }
    ExitCode::from(report.exit_code)
}
