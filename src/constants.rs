//! App-wide constants.
//!
//! Centralises the binary name, environment variable names, and the
//! OAuth2 endpoint so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "analytics-mcp";

/// Crate version, as reported by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Google OAuth2 token endpoint used for refresh-token exchange.
pub const GOOGLE_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_REFRESH_TOKEN_PATH: &str = "GOOGLE_REFRESH_TOKEN_PATH";
pub const ENV_CLIENT_ID: &str = "GOOGLE_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "GOOGLE_CLIENT_SECRET";
pub const ENV_LOG_LEVEL: &str = "MCP_LOG_LEVEL";

/// Extra `tracing` filter directives layered over the resolved level.
pub const ENV_RUST_LOG: &str = "RUST_LOG";
