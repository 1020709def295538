//! CLI command definitions and terminal rendering.
//!
//! Uses clap derive macros for argument definitions.

pub mod args;

use colored::Colorize;

use analytics_mcp::config::{AuthMode, ConfigSummary};
use analytics_mcp::constants::{
    ENV_CLIENT_ID, ENV_CLIENT_SECRET, ENV_LOG_LEVEL, ENV_REFRESH_TOKEN_PATH, ENV_RUST_LOG,
};
use analytics_mcp::env::Env;

/// An environment variable the server reads.
pub struct KnownVar {
    pub name: &'static str,
    pub description: &'static str,
    /// Secret values are reported as set/unset only.
    pub secret: bool,
}

pub const KNOWN_VARS: &[KnownVar] = &[
    KnownVar {
        name: ENV_REFRESH_TOKEN_PATH,
        description: "file containing the OAuth2 refresh token",
        secret: false,
    },
    KnownVar {
        name: ENV_CLIENT_ID,
        description: "OAuth2 client id",
        secret: false,
    },
    KnownVar {
        name: ENV_CLIENT_SECRET,
        description: "OAuth2 client secret",
        secret: true,
    },
    KnownVar {
        name: ENV_LOG_LEVEL,
        description: "DEBUG, INFO, WARNING, ERROR or CRITICAL (default INFO)",
        secret: false,
    },
    KnownVar {
        name: ENV_RUST_LOG,
        description: "extra tracing filter directives",
        secret: false,
    },
];

/// Render a resolved configuration summary for the terminal.
pub fn render_summary(summary: &ConfigSummary) -> String {
    let auth = match summary.auth_mode {
        AuthMode::RefreshToken => summary.auth_mode.to_string().green().bold(),
        AuthMode::ApplicationDefault => summary.auth_mode.to_string().cyan().bold(),
    };
    let token = match (&summary.refresh_token_path, summary.refresh_token_loaded) {
        (Some(path), true) => format!("loaded from {}", path.display()),
        (Some(path), false) => format!("{} ({})", "not loaded".yellow(), path.display()),
        (None, _) => "not configured".dimmed().to_string(),
    };
    let client_id = summary
        .client_id
        .as_deref()
        .map(str::to_string)
        .unwrap_or_else(|| "unset".dimmed().to_string());
    let client_secret = if summary.client_secret_set {
        "set".to_string()
    } else {
        "unset".dimmed().to_string()
    };

    let mut out = String::new();
    out.push_str(&format!("  {} {}\n", "✔".green().bold(), "configuration is valid".bold()));
    out.push_str(&format!("  {}           {auth}\n", "auth:".dimmed()));
    out.push_str(&format!("  {}  {token}\n", "refresh token:".dimmed()));
    out.push_str(&format!("  {}      {client_id}\n", "client id:".dimmed()));
    out.push_str(&format!("  {}  {client_secret}\n", "client secret:".dimmed()));
    out.push_str(&format!("  {}      {}\n", "log level:".dimmed(), summary.log_level));
    out.push_str(&format!("  {} {}\n", "token endpoint:".dimmed(), summary.token_endpoint));
    out
}

/// Render the known variables and whether each is set in `env`.
pub fn render_env(env: &Env) -> String {
    let mut out = String::new();
    for var in KNOWN_VARS {
        let value = match env.non_empty(var.name) {
            Some(_) if var.secret => "set".green().to_string(),
            Some(v) => v.green().to_string(),
            None => "unset".dimmed().to_string(),
        };
        out.push_str(&format!("  {}  {}\n", var.name.bold(), value));
        out.push_str(&format!("      {}\n", var.description.dimmed()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics_mcp::config::ResolvedConfig;

    #[test]
    fn summary_mentions_auth_mode_and_level() {
        colored::control::set_override(false);
        let summary = ResolvedConfig::resolve(&Env::mock([(ENV_LOG_LEVEL, "error")]))
            .unwrap()
            .summary();

        let out = render_summary(&summary);
        assert!(out.contains("application default credentials"));
        assert!(out.contains("ERROR"));
        assert!(out.contains("https://oauth2.googleapis.com/token"));
    }

    #[test]
    fn env_listing_hides_secret_values() {
        colored::control::set_override(false);
        let env = Env::mock([(ENV_CLIENT_SECRET, "hunter2"), (ENV_CLIENT_ID, "my-client")]);

        let out = render_env(&env);
        assert!(!out.contains("hunter2"));
        assert!(out.contains("my-client"));
        assert!(out.contains(ENV_REFRESH_TOKEN_PATH));
    }

    #[test]
    fn known_vars_cover_all_sources() {
        let names: Vec<_> = KNOWN_VARS.iter().map(|v| v.name).collect();
        assert_eq!(
            names,
            vec![
                "GOOGLE_REFRESH_TOKEN_PATH",
                "GOOGLE_CLIENT_ID",
                "GOOGLE_CLIENT_SECRET",
                "MCP_LOG_LEVEL",
                "RUST_LOG",
            ]
        );
    }
}
