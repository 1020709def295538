//! analytics-mcp: configuration check tool for the Google Analytics MCP server.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use analytics_mcp::config::ConfigRegistry;
use analytics_mcp::env::Env;
use analytics_mcp::logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{CheckArgs, Cli, Command, OutputFormat};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Check(args) => run_check(args),
        Command::Env => run_env(),
    }
}

/// Resolve the configuration exactly as server startup would and report it.
fn run_check(args: CheckArgs) -> Result<()> {
    let registry = ConfigRegistry::from_process_env();
    let config = logging::bootstrap(|| registry.get())
        .context("failed to resolve configuration")?;
    let summary = config.summary();

    match args.format {
        OutputFormat::Terminal => print!("{}", cli::render_summary(&summary)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)
                .context("failed to serialize configuration summary")?;
            println!("{json}");
        }
    }
    Ok(())
}

/// List the recognised environment variables.
fn run_env() -> Result<()> {
    print!("{}", cli::render_env(&Env::real()));
    Ok(())
}
