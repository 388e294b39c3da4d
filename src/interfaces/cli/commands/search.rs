//! Search command

use std::sync::Arc;

use colored::Colorize;
use tracing::debug;

use crate::github::{GithubPagingSource, Repo, SearchService};
use crate::interfaces::cli::CliError;
use crate::paging::{LoadOutcome, Pager, PagingConfig};

pub struct SearchOptions {
    pub query: String,
    /// 加载次数，第一次为初次加载
    pub pages: usize,
    pub start_page: Option<i32>,
    pub json: bool,
}

/// 驱动分页源完成若干次加载并打印结果
pub async fn search_repos(
    service: Arc<dyn SearchService>,
    paging: PagingConfig,
    options: SearchOptions,
) -> Result<Vec<Repo>, CliError> {
    debug!("Searching via {} provider", service.name());

    let source = Arc::new(GithubPagingSource::new(service, options.query.as_str()));
    let mut pager = Pager::new(source, paging);

    pager.refresh(options.start_page).await?;
    for _ in 1..options.pages {
        if pager.append().await? == LoadOutcome::EndReached {
            break;
        }
    }

    let repos: Vec<Repo> = pager.items().cloned().collect();
    let has_more = pager.pages().last().is_some_and(|p| p.next_key.is_some());

    if options.json {
        let out = serde_json::to_string_pretty(&repos)
            .map_err(|e| CliError::CommandError(format!("Failed to encode results: {}", e)))?;
        println!("{}", out);
    } else {
        print_repos(&options.query, &repos, has_more);
    }

    Ok(repos)
}

fn print_repos(query: &str, repos: &[Repo], has_more: bool) {
    if repos.is_empty() {
        println!(
            "{} No repositories found for {}",
            "ℹ".bold().blue(),
            query.cyan()
        );
        return;
    }

    println!("{}", "Repositories:".bold().green());
    println!();
    for repo in repos {
        let mut info_parts = vec![format!(
            "{} {}",
            repo.full_name.cyan(),
            format!("★ {}", repo.stargazers_count).yellow()
        )];

        if let Some(ref language) = repo.language {
            info_parts.push(format!("[{}]", language).dimmed().to_string());
        }

        println!("  {}", info_parts.join(" "));
        if let Some(ref description) = repo.description {
            println!("      {}", description.dimmed());
        }
    }
    println!();
    println!(
        "{} Loaded {} repositories{}",
        "ℹ".bold().blue(),
        repos.len().to_string().green(),
        if has_more { ", more available" } else { "" }
    );
}
