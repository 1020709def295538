//! Resolved configuration and the logic that builds it from the environment.
//!
//! Sources:
//! - `GOOGLE_REFRESH_TOKEN_PATH`: file holding the OAuth2 refresh token
//! - `GOOGLE_CLIENT_ID` / `GOOGLE_CLIENT_SECRET`: OAuth2 client credentials
//! - `MCP_LOG_LEVEL`: log level, defaults to `INFO`
//!
//! Only an incomplete credential triple is fatal. Everything else degrades
//! to a default and is logged.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use super::log_level::LogLevel;
use super::secret::{Secret, read_secret_file};
use crate::constants::{
    ENV_CLIENT_ID, ENV_CLIENT_SECRET, ENV_LOG_LEVEL, ENV_REFRESH_TOKEN_PATH, GOOGLE_TOKEN_URI,
};
use crate::env::Env;

/// Errors during config resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "GOOGLE_CLIENT_ID and GOOGLE_CLIENT_SECRET must be set when using refresh token \
         authentication (missing: {})",
        .missing.join(", ")
    )]
    IncompleteCredentials { missing: Vec<&'static str> },
}

/// How the server authenticates against the Google APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    /// Refresh token plus client id/secret.
    RefreshToken,
    /// Ambient Application Default Credentials.
    ApplicationDefault,
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthMode::RefreshToken => write!(f, "refresh token"),
            AuthMode::ApplicationDefault => write!(f, "application default credentials"),
        }
    }
}

/// Immutable server configuration.
///
/// Only obtainable through [`ResolvedConfig::resolve`] (or `Default`, which
/// carries no credentials), so the credential triple is always complete or
/// has no refresh token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedConfig {
    refresh_token: Option<Secret>,
    refresh_token_path: Option<PathBuf>,
    client_id: Option<String>,
    client_secret: Option<Secret>,
    log_level: LogLevel,
}

/// Secret-free view of a [`ResolvedConfig`], suitable for printing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSummary {
    pub auth_mode: AuthMode,
    pub refresh_token_path: Option<PathBuf>,
    pub refresh_token_loaded: bool,
    pub client_id: Option<String>,
    pub client_secret_set: bool,
    pub log_level: LogLevel,
    pub token_endpoint: &'static str,
}

impl ResolvedConfig {
    /// Resolve configuration from the given environment.
    ///
    /// Reads the refresh-token file at most once. Fails only when a refresh
    /// token is present without both client credentials.
    pub fn resolve(env: &Env) -> Result<Self, ConfigError> {
        let refresh_token_path = env.non_empty(ENV_REFRESH_TOKEN_PATH).map(PathBuf::from);
        let refresh_token = refresh_token_path.as_deref().and_then(read_secret_file);

        let config = Self {
            refresh_token,
            refresh_token_path,
            client_id: env.non_empty(ENV_CLIENT_ID),
            client_secret: env.non_empty(ENV_CLIENT_SECRET).map(Secret::from),
            log_level: Self::resolve_log_level(env),
        };
        config.validate_credentials()?;

        debug!(
            auth_mode = %config.auth_mode(),
            log_level = %config.log_level,
            "Configuration resolved"
        );
        Ok(config)
    }

    /// Reject a refresh token that comes without both client credentials.
    fn validate_credentials(&self) -> Result<(), ConfigError> {
        if self.refresh_token.is_none() {
            return Ok(());
        }
        let mut missing = Vec::new();
        if self.client_id.is_none() {
            missing.push(ENV_CLIENT_ID);
        }
        if self.client_secret.is_none() {
            missing.push(ENV_CLIENT_SECRET);
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::IncompleteCredentials { missing })
        }
    }

    fn resolve_log_level(env: &Env) -> LogLevel {
        let raw = match env.var(ENV_LOG_LEVEL) {
            Ok(val) => val.to_uppercase(),
            Err(_) => return LogLevel::default(),
        };
        raw.parse().unwrap_or_else(|_| {
            warn!(
                "Invalid log level: {raw}, using {}",
                LogLevel::default()
            );
            LogLevel::default()
        })
    }

    pub fn refresh_token(&self) -> Option<&Secret> {
        self.refresh_token.as_ref()
    }

    /// Path the refresh token was (or would have been) read from.
    pub fn refresh_token_path(&self) -> Option<&std::path::Path> {
        self.refresh_token_path.as_deref()
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    pub fn client_secret(&self) -> Option<&Secret> {
        self.client_secret.as_ref()
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    /// True iff refresh token, client id, and client secret are all present.
    pub fn has_refresh_token_auth(&self) -> bool {
        self.refresh_token.is_some() && self.client_id.is_some() && self.client_secret.is_some()
    }

    /// OAuth2 token endpoint. Constant, independent of configuration.
    pub fn token_endpoint(&self) -> &'static str {
        GOOGLE_TOKEN_URI
    }

    pub fn auth_mode(&self) -> AuthMode {
        if self.has_refresh_token_auth() {
            AuthMode::RefreshToken
        } else {
            AuthMode::ApplicationDefault
        }
    }

    pub fn summary(&self) -> ConfigSummary {
        ConfigSummary {
            auth_mode: self.auth_mode(),
            refresh_token_path: self.refresh_token_path.clone(),
            refresh_token_loaded: self.refresh_token.is_some(),
            client_id: self.client_id.clone(),
            client_secret_set: self.client_secret.is_some(),
            log_level: self.log_level,
            token_endpoint: self.token_endpoint(),
        }
    }
}
