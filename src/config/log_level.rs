//! The fixed set of log levels accepted via `MCP_LOG_LEVEL`.

use serde::Serialize;
use strum::{AsRefStr, Display, EnumString, VariantNames};
use tracing::level_filters::LevelFilter;

/// Log level requested for the server process.
///
/// Parses case-insensitively and renders as its uppercase name
/// (`"WARNING"`, not `"Warning"`).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Display,
    EnumString,
    AsRefStr,
    VariantNames,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// Uppercase name, e.g. `"DEBUG"`.
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    /// Map onto the closest `tracing` level filter.
    ///
    /// `tracing` has no level above `ERROR`, so `CRITICAL` collapses onto it.
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warning => LevelFilter::WARN,
            LogLevel::Error | LogLevel::Critical => LevelFilter::ERROR,
        }
    }
}
