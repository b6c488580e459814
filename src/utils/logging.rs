use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &str = "coin_charts=info,price_chart=info,dominance_chart=info";

/// Install the global tracing subscriber. `RUST_LOG` overrides the defaults.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
