use std::env;
use std::path::PathBuf;
use crate::api::coingecko::CoinGeckoClient;

/// Runtime settings, read from the environment (and `.env` if present)
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub output_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            api_url: env::var("COINGECKO_API_URL")
                .unwrap_or_else(|_| CoinGeckoClient::DEFAULT_BASE_URL.to_string()),
            output_dir: env::var("CHART_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: CoinGeckoClient::DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}
