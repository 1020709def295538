//! Server startup: resolve configuration, configure logging, hand off.
//!
//! The MCP tool-dispatch runtime lives outside this crate and plugs in
//! through [`ToolRuntime`].

use std::error::Error;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{AuthMode, ConfigError, ConfigRegistry, LogLevel, ResolvedConfig};
use crate::env::Env;
use crate::logging::{self, LoggingError};

/// The runtime that takes over once configuration and logging are ready.
pub trait ToolRuntime {
    type Error: Error + Send + Sync + 'static;

    /// Serve until the host disconnects.
    fn run(self, config: &ResolvedConfig) -> Result<(), Self::Error>;
}

impl<F, E> ToolRuntime for F
where
    F: FnOnce(&ResolvedConfig) -> Result<(), E>,
    E: Error + Send + Sync + 'static,
{
    type Error = E;

    fn run(self, config: &ResolvedConfig) -> Result<(), E> {
        self(config)
    }
}

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("invalid configuration")]
    Config(#[from] ConfigError),

    #[error("tool runtime failed")]
    Runtime(#[source] Box<dyn Error + Send + Sync>),
}

/// Resolve configuration, install logging, and run `runtime`.
///
/// The runtime is never started when configuration is invalid.
pub fn run_server<R: ToolRuntime>(registry: &ConfigRegistry, runtime: R) -> Result<(), StartupError> {
    let config = logging::bootstrap(|| registry.get())?;

    configure_logging(config.log_level(), registry.env());

    info!("Starting Google Analytics MCP server with STDIO transport");
    match config.auth_mode() {
        AuthMode::RefreshToken => info!("Using refresh token authentication"),
        AuthMode::ApplicationDefault => info!("Using Application Default Credentials"),
    }

    runtime
        .run(config)
        .map_err(|e| StartupError::Runtime(Box::new(e)))
}

/// Install the global subscriber. Logging is best-effort and never blocks startup.
fn configure_logging(level: LogLevel, env: &Env) {
    match logging::init(level, env) {
        Ok(()) => {}
        Err(LoggingError::AlreadyInitialized) => {
            debug!("Tracing subscriber already installed, keeping it");
        }
        Err(err @ LoggingError::Filter(_)) => {
            let _ = logging::init(level, &Env::empty());
            warn!(error = %err, "Ignoring RUST_LOG");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ENV_CLIENT_ID, ENV_LOG_LEVEL, ENV_REFRESH_TOKEN_PATH};
    use serial_test::serial;

    #[test]
    #[serial]
    fn hands_resolved_config_to_runtime() {
        let registry = ConfigRegistry::new(Env::mock([(ENV_LOG_LEVEL, "debug")]));
        let mut seen = None;

        run_server(&registry, |config: &ResolvedConfig| -> Result<(), std::io::Error> {
            seen = Some(config.clone());
            Ok(())
        })
        .unwrap();

        let seen = seen.unwrap();
        assert_eq!(seen.log_level(), LogLevel::Debug);
        assert_eq!(seen.auth_mode(), AuthMode::ApplicationDefault);
        assert_eq!(&seen, registry.get().unwrap());
    }

    #[test]
    #[serial]
    fn invalid_config_never_starts_runtime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "1//token").unwrap();
        let registry = ConfigRegistry::new(Env::mock([
            (ENV_REFRESH_TOKEN_PATH, path.to_string_lossy().into_owned()),
            (ENV_CLIENT_ID, "client-id".to_string()),
        ]));
        let mut started = false;

        let err = run_server(&registry, |_: &ResolvedConfig| -> Result<(), std::io::Error> {
            started = true;
            Ok(())
        })
        .unwrap_err();

        assert!(!started);
        assert!(matches!(
            err,
            StartupError::Config(ConfigError::IncompleteCredentials { .. })
        ));
    }

    #[test]
    #[serial]
    fn runtime_failure_is_propagated() {
        let registry = ConfigRegistry::new(Env::empty());

        let err = run_server(&registry, |_: &ResolvedConfig| -> Result<(), std::io::Error> {
            Err(std::io::Error::other("host disconnected"))
        })
        .unwrap_err();

        assert!(matches!(err, StartupError::Runtime(_)));
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "host disconnected");
    }

    #[test]
    #[serial]
    fn bad_rust_log_does_not_block_startup() {
        let registry = ConfigRegistry::new(Env::mock([("RUST_LOG", "x=notalevel")]));
        let result = run_server(&registry, |_: &ResolvedConfig| -> Result<(), std::io::Error> {
            Ok(())
        });
        assert!(result.is_ok());
    }
}
