//! Integration tests for the startup sequence.

use analytics_mcp::config::{AuthMode, ConfigRegistry, LogLevel, ResolvedConfig};
use analytics_mcp::env::Env;
use analytics_mcp::{StartupError, run_server};
use serial_test::serial;

#[test]
#[serial]
fn refresh_token_auth_reaches_runtime() {
    let dir = tempfile::tempdir().unwrap();
    let token_path = dir.path().join("token");
    std::fs::write(&token_path, "1//token\n").unwrap();
    let registry = ConfigRegistry::new(Env::mock([
        ("GOOGLE_REFRESH_TOKEN_PATH", token_path.to_string_lossy().into_owned()),
        ("GOOGLE_CLIENT_ID", "client-id".to_string()),
        ("GOOGLE_CLIENT_SECRET", "client-secret".to_string()),
        ("MCP_LOG_LEVEL", "warning".to_string()),
    ]));
    let mut mode = None;

    run_server(&registry, |config: &ResolvedConfig| -> Result<(), std::io::Error> {
        mode = Some((config.auth_mode(), config.log_level()));
        Ok(())
    })
    .unwrap();

    assert_eq!(mode, Some((AuthMode::RefreshToken, LogLevel::Warning)));
}

#[test]
#[serial]
fn incomplete_credentials_abort_startup() {
    let dir = tempfile::tempdir().unwrap();
    let token_path = dir.path().join("token");
    std::fs::write(&token_path, "1//token\n").unwrap();
    let registry = ConfigRegistry::new(Env::mock([(
        "GOOGLE_REFRESH_TOKEN_PATH",
        token_path.to_string_lossy().into_owned(),
    )]));

    let err = run_server(&registry, |_: &ResolvedConfig| -> Result<(), std::io::Error> {
        panic!("runtime must not start");
    })
    .unwrap_err();

    assert!(matches!(err, StartupError::Config(_)));
}
