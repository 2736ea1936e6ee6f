//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - research: run the research crew on a topic
//! - health: check service and backend health
//! - models: list models available to the service

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// crewctl - drive a local multi-agent research service
#[derive(Parser, Debug)]
#[command(name = "crewctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Research a topic and print the resulting report
    Research {
        /// Topic to research
        topic: String,

        /// Research depth (brief, medium, deep)
        #[arg(short, long)]
        depth: Option<String>,

        /// Override the configured service base URL
        #[arg(short, long)]
        url: Option<String>,
    },

    /// Check service health, including its LLM backend
    Health,

    /// List models the service's backend has available
    Models,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["crewctl"]).is_err());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["crewctl", "-v", "health"]).unwrap();
        assert!(cli.is_verbose());
    }

    #[test]
    fn test_cli_config_option() {
        let cli = Cli::try_parse_from(["crewctl", "-c", "/path/to/crewctl.yml", "models"]).unwrap();
        assert_eq!(
            cli.config.as_ref(),
            Some(&PathBuf::from("/path/to/crewctl.yml"))
        );
    }

    #[test]
    fn test_research_command() {
        let cli = Cli::try_parse_from(["crewctl", "research", "rust async runtimes"]).unwrap();
        match cli.command {
            Commands::Research { topic, depth, url } => {
                assert_eq!(topic, "rust async runtimes");
                assert!(depth.is_none());
                assert!(url.is_none());
            }
            _ => panic!("Expected research command"),
        }
    }

    #[test]
    fn test_research_with_depth() {
        let cli = Cli::try_parse_from(["crewctl", "research", "rust", "-d", "deep"]).unwrap();
        match cli.command {
            Commands::Research { depth, .. } => {
                assert_eq!(depth, Some("deep".to_string()));
            }
            _ => panic!("Expected research command"),
        }
    }

    #[test]
    fn test_research_with_url_override() {
        let cli = Cli::try_parse_from([
            "crewctl",
            "research",
            "rust",
            "--url",
            "http://crewai:8000",
        ])
        .unwrap();
        match cli.command {
            Commands::Research { url, .. } => {
                assert_eq!(url, Some("http://crewai:8000".to_string()));
            }
            _ => panic!("Expected research command"),
        }
    }

    #[test]
    fn test_research_requires_topic() {
        assert!(Cli::try_parse_from(["crewctl", "research"]).is_err());
    }

    #[test]
    fn test_health_command() {
        let cli = Cli::try_parse_from(["crewctl", "health"]).unwrap();
        assert!(matches!(cli.command, Commands::Health));
    }

    #[test]
    fn test_models_command() {
        let cli = Cli::try_parse_from(["crewctl", "models"]).unwrap();
        assert!(matches!(cli.command, Commands::Models));
    }

    #[test]
    fn test_help_works() {
        // Verify help doesn't panic
        Cli::command().debug_assert();
    }

    #[test]
    fn test_version_flag() {
        let result = Cli::try_parse_from(["crewctl", "--version"]);
        // Version flag causes early exit with error (expected)
        assert!(result.is_err());
    }
}
