pub mod config;
pub mod errors;
pub mod logging;
pub mod text;

pub use config::Config;
pub use errors::ChartError;
pub use text::capitalize;
