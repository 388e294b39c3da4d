//! CLI interface module
//!
//! This module provides command-line interface functionality for repo-pager.

pub mod commands;

use std::fmt;
use std::sync::Arc;

use crate::cli::{Commands, ConfigCommands};
use crate::config::get_config;
use crate::errors::PagerError;
use crate::github::{GithubService, SearchService};
use commands::{SearchOptions, config_generate, search_repos};

#[derive(Debug)]
pub enum CliError {
    /// 加载失败，保留原始错误以便按类型着色输出
    LoadError(PagerError),
    ParseError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::LoadError(err) => format!("Load error: {}", err),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::LoadError(err) => err.format_colored(),
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<PagerError> for CliError {
    fn from(err: PagerError) -> Self {
        CliError::LoadError(err)
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    match cmd {
        Commands::Search {
            query,
            pages,
            start_page,
            json,
        } => {
            if query.trim().is_empty() {
                return Err(CliError::ParseError("Query must not be empty".to_string()));
            }
            if start_page.is_some_and(|p| p < 1) {
                return Err(CliError::ParseError(
                    "--start-page must be 1 or greater".to_string(),
                ));
            }

            let config = get_config();
            let service: Arc<dyn SearchService> = Arc::new(GithubService::new(&config.github));
            let options = SearchOptions {
                query,
                pages: pages.max(1),
                start_page,
                json,
            };
            search_repos(service, config.paging.to_paging_config(), options).await?;
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigCommands::Generate { output_path, force } => {
                config_generate(output_path, force).await
            }
        },
    }
}
