//! Orchestration result models

use std::path::PathBuf;

/// What a chart command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartOutcome {
    /// Chart image written to `path`
    Rendered { path: PathBuf },
    /// The API returned no prices for `symbol`; nothing was written
    NoData { symbol: String },
    /// `symbol` cannot be used as a coin id or file name; nothing was fetched
    InvalidSymbol { symbol: String },
    /// No symbol was given
    Usage,
}

/// Console text and process exit status for a finished command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub message: String,
    pub exit_code: u8,
}

impl Report {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), exit_code: 0 }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self { message: message.into(), exit_code: 1 }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}
