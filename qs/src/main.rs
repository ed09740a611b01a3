//! Quickstart - Interactive MVP Project Scaffolder
//!
//! CLI entry point.

use std::fs;

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;

use quickstart::cli::{Cli, Command, get_log_path};
use quickstart::config::Config;
use quickstart::rules;
use quickstart::setup::Setup;

fn setup_logging(verbose: bool) -> Result<()> {
    // Log to a file so the interactive prompts stay clean
    let log_path = get_log_path();
    if let Some(log_dir) = log_path.parent() {
        fs::create_dir_all(log_dir).context("Failed to create log directory")?;
    }

    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(&log_path).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    match cli.command {
        Some(Command::ListArchitectures) => cmd_list_architectures(),
        Some(Command::ListRules) => cmd_list_rules(&config),
        Some(Command::Setup) | None => Setup::run_in_cwd(config).await,
    }
}

/// List catalog architectures for the current directory
fn cmd_list_architectures() -> Result<()> {
    let root = std::env::current_dir().context("Failed to get current directory")?;
    Setup::list_architectures(&root);
    Ok(())
}

/// List available rule files
fn cmd_list_rules(config: &Config) -> Result<()> {
    let root = std::env::current_dir().context("Failed to get current directory")?;
    let rules_dir = root.join(&config.paths.rules_dir);

    let available = rules::available_rules(&rules_dir);
    if available.is_empty() {
        println!("No rule files found in {}", rules_dir.display());
        return Ok(());
    }

    println!("Available rules:");
    for rule in &available {
        println!("  - {} ({})", rules::rule_title(rule), rule);
    }

    Ok(())
}
