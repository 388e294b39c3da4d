//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// repo-pager - page through GitHub repository search results
#[derive(Parser)]
#[command(name = "repo-pager")]
#[command(version)]
#[command(about = "Page through GitHub repository search results", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(long, short = 'c', global = true, default_value = crate::config::DEFAULT_CONFIG_PATH)]
    pub config: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Search repositories by name and description
    Search {
        /// Search terms
        query: String,

        /// Number of loads to perform (the first one fetches the initial load size)
        #[arg(long, short = 'p', default_value_t = 1)]
        pages: usize,

        /// Start from this page instead of the first one
        #[arg(long)]
        start_page: Option<i32>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_command() {
        let cli = Cli::try_parse_from(["repo-pager", "search", "android", "--pages", "3"]).unwrap();
        assert_eq!(cli.config, "config.toml");
        match cli.command {
            Commands::Search {
                query,
                pages,
                start_page,
                json,
            } => {
                assert_eq!(query, "android");
                assert_eq!(pages, 3);
                assert!(start_page.is_none());
                assert!(!json);
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_parse_global_config_flag() {
        let cli = Cli::try_parse_from([
            "repo-pager",
            "config",
            "generate",
            "out.toml",
            "-c",
            "custom.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, "custom.toml");
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: ConfigCommands::Generate { force: false, .. }
            }
        ));
    }
}
