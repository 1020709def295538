//! analytics-mcp: configuration and startup core for the Google Analytics
//! MCP server (library crate).
//!
//! Re-exports public modules for integration tests and the tool runtime.

pub mod config;
pub mod constants;
pub mod env;
pub mod logging;
pub mod startup;

pub use config::{ConfigError, ConfigRegistry, LogLevel, ResolvedConfig};
pub use startup::{StartupError, ToolRuntime, run_server};
