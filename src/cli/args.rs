//! Clap argument types.

use clap::{Parser, ValueEnum};

/// Google Analytics MCP server configuration tool.
#[derive(Parser, Debug)]
#[command(
    name = analytics_mcp::constants::APP_NAME,
    version = analytics_mcp::constants::VERSION,
    about = "Inspect and validate the Google Analytics MCP server configuration",
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Resolve the configuration from the environment and report it.
    Check(CheckArgs),

    /// List the environment variables the server reads.
    Env,
}

/// Arguments for the `check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}
