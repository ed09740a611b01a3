//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Quickstart - interactive MVP project scaffolder
#[derive(Parser)]
#[command(
    name = "qs",
    about = "Interactive quick-start scaffolder for MVP projects",
    version = env!("GIT_DESCRIBE"),
    after_help = "Logs are written to: ~/.local/share/quickstart/logs/quickstart.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Run the interactive setup flow (default)
    Setup,

    /// List architectures available in the catalog
    ListArchitectures,

    /// List available rule files
    ListRules,
}

/// Path the log file is written to
pub fn get_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("quickstart")
        .join("logs")
        .join("quickstart.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_command() {
        let cli = Cli::parse_from(["qs"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_setup() {
        let cli = Cli::parse_from(["qs", "setup"]);
        assert!(matches!(cli.command, Some(Command::Setup)));
    }

    #[test]
    fn test_cli_parse_list_architectures() {
        let cli = Cli::parse_from(["qs", "list-architectures"]);
        assert!(matches!(cli.command, Some(Command::ListArchitectures)));
    }

    #[test]
    fn test_cli_parse_list_rules() {
        let cli = Cli::parse_from(["qs", "list-rules"]);
        assert!(matches!(cli.command, Some(Command::ListRules)));
    }

    #[test]
    fn test_cli_with_config() {
        let cli = Cli::parse_from(["qs", "-c", "/path/to/config.yml", "setup"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/config.yml")));
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::parse_from(["qs", "-v", "list-rules"]);
        assert!(cli.verbose);
    }
}
