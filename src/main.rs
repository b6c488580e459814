use std::process::ExitCode;
use tracing::error;
use coin_charts::api::coingecko::CoinGeckoClient;
use coin_charts::commands::price_chart;
use coin_charts::utils::{logging, Config};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::from_env();
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let client = CoinGeckoClient::with_base_url(config.api_url.clone());

    let result = price_chart::execute(&client, &config, &args).await;
    let report = price_chart::report(&result);

    if report.is_success() {
        println!("{}", report.message.trim_end());
    } else {
        error!("{}", report.message);
    }
    ExitCode::from(report.exit_code)
}
