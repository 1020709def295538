//! Process logging built on `tracing`.
//!
//! All output goes to stderr: stdout belongs to the stdio MCP transport.
//! Records carry timestamp, target, level, and message.

use std::io::IsTerminal;

use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LogLevel;
use crate::constants::ENV_RUST_LOG;
use crate::env::Env;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("invalid RUST_LOG directives: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// Build the filter for `level`, with any `RUST_LOG` directives layered on top.
pub fn build_filter(level: LogLevel, env: &Env) -> Result<EnvFilter, LoggingError> {
    let builder = EnvFilter::builder().with_default_directive(level.to_level_filter().into());
    let directives = env.non_empty(ENV_RUST_LOG).unwrap_or_default();
    Ok(builder.parse(directives)?)
}

/// Install the global subscriber at `level`.
///
/// Can only succeed once per process.
pub fn init(level: LogLevel, env: &Env) -> Result<(), LoggingError> {
    let filter = build_filter(level, env)?;
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)
}

/// Run `f` with a scoped WARN-and-above stderr subscriber.
///
/// Config resolution happens before the real subscriber can be built, so
/// its warnings and errors would otherwise be dropped.
pub fn bootstrap<T>(f: impl FnOnce() -> T) -> T {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_max_level(LevelFilter::WARN)
        .with_target(true)
        .finish();
    tracing::subscriber::with_default(subscriber, f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn filter_uses_resolved_level() {
        let filter = build_filter(LogLevel::Debug, &Env::empty()).unwrap();
        assert!(filter.to_string().to_lowercase().contains("debug"));
    }

    #[test]
    fn filter_layers_rust_log_directives() {
        let env = Env::mock([("RUST_LOG", "analytics_mcp=trace")]);
        let filter = build_filter(LogLevel::Warning, &env).unwrap();
        assert!(filter.to_string().to_lowercase().contains("analytics_mcp=trace"));
    }

    #[test]
    fn invalid_rust_log_is_an_error() {
        let env = Env::mock([("RUST_LOG", "analytics_mcp=notalevel")]);
        let err = build_filter(LogLevel::Info, &env).unwrap_err();
        assert!(matches!(err, LoggingError::Filter(_)));
    }

    #[test]
    fn bootstrap_returns_closure_value() {
        let value = bootstrap(|| {
            tracing::warn!("bootstrap warning");
            42
        });
        assert_eq!(value, 42);
    }

    #[test]
    #[serial]
    fn second_init_reports_already_initialized() {
        // The first call may also fail if another test installed a subscriber.
        let _ = init(LogLevel::Info, &Env::empty());
        let second = init(LogLevel::Info, &Env::empty());
        assert!(matches!(second, Err(LoggingError::AlreadyInitialized)));
    }
}
