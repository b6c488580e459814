use tracing::{info, warn};
use crate::api::coingecko::CoinGeckoClient;
use crate::models::{ChartOutcome, Report};
use crate::services::{price_service, render_line_chart, ChartStyle};
use crate::utils::{capitalize, ChartError, Config};

/// Coin ids known to work with the market chart endpoint
pub const KNOWN_SYMBOLS: [(&str, &str); 10] = [
    ("Bitcoin", "bitcoin"),
    ("Ethereum", "ethereum"),
    ("Polkadot", "polkadot"),
    ("Ripple", "ripple"),
    ("Cardano", "cardano"),
    ("Dogecoin", "dogecoin"),
    ("Solana", "solana"),
    ("Chainlink", "chainlink"),
    ("Binance Coin", "binancecoin"),
    ("Litecoin", "litecoin"),
];

pub fn usage() -> String {
    let mut text = String::from("Please specify a cryptocurrency symbol as an argument.\n");
    text.push_str("Usage: price_chart <symbol>\n\nAvailable cryptocurrencies:\n");
    for (name, id) in KNOWN_SYMBOLS {
        text.push_str(&format!("  - {} ({})\n", name, id));
    }
    text
}

/// A symbol doubles as a URL path segment and a file name stem, so path
/// separators and parent-directory components are refused
pub fn is_valid_symbol(symbol: &str) -> bool {
    !symbol.is_empty() && !symbol.contains('/') && !symbol.contains('\\') && !symbol.contains("..")
}

pub fn chart_title(symbol: &str) -> String {
    format!("{} Price Over Last 6 Months", capitalize(symbol))
}

pub fn chart_filename(symbol: &str) -> String {
    format!("{}_price_chart.png", symbol)
}

/// Fetch the 180-day price history for the symbol in `args[0]` and chart it.
///
/// Only the first argument is used. An empty history leaves the output
/// directory untouched.
pub async fn execute(
    client: &CoinGeckoClient,
    config: &Config,
    args: &[String],
) -> Result<ChartOutcome, ChartError> {
    let symbol = match args.first() {
        Some(arg) if !arg.trim().is_empty() => arg.trim().to_lowercase(),
        _ => {
            warn!("No symbol provided for price chart");
            return Ok(ChartOutcome::Usage);
        }
    };

    if !is_valid_symbol(&symbol) {
        warn!("Rejected symbol {:?}", symbol);
        return Ok(ChartOutcome::InvalidSymbol { symbol });
    }

    info!("💹 Fetching price history for {}", symbol);
    let series = price_service::fetch_price_series(client, &symbol).await?;

    if series.is_empty() {
        warn!("No price data returned for {}", symbol);
        return Ok(ChartOutcome::NoData { symbol });
    }

    let path = config.output_dir.join(chart_filename(&symbol));
    info!("🎨 Rendering {} points to {}", series.len(), path.display());
    render_line_chart(&series, &chart_title(&symbol), &ChartStyle::price(), &path)?;

    Ok(ChartOutcome::Rendered { path })
}

/// Console text and exit status for a finished run.
///
/// Usage, rejected symbols and empty histories still exit 0; only errors fail.
pub fn report(result: &Result<ChartOutcome, ChartError>) -> Report {
    match result {
        Ok(ChartOutcome::Rendered { path }) => Report::success(format!("{}", path.display())),
        Ok(ChartOutcome::NoData { symbol }) => {
            Report::success(format!("Failed to fetch data for {}", symbol))
        }
        Ok(ChartOutcome::InvalidSymbol { symbol }) => {
            Report::success(format!("Invalid cryptocurrency symbol: {}\n{}", symbol, usage()))
        }
        Ok(ChartOutcome::Usage) => Report::success(usage()),
        Err(e) => Report::failure(format!("Price chart failed: {}", e)),
    }
}
