//! GitHub 搜索服务
//!
//! 通过 ureq 调用 `GET /search/repositories`。ureq 是同步客户端，
//! 请求放在 `spawn_blocking` 中执行。不做重试、退避或缓存。

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, trace};
use ureq::Agent;

use super::model::RepoSearchResponse;
use crate::config::GithubConfig;
use crate::errors::{PagerError, Result};

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const SEARCH_REPOSITORIES_PATH: &str = "/search/repositories";

/// 搜索服务 trait
#[async_trait]
pub trait SearchService: Send + Sync {
    /// 搜索仓库，返回一页结果
    ///
    /// 网络失败返回 `PagerError::Transport`，非 2xx 返回 `PagerError::HttpStatus`。
    async fn search_repos(
        &self,
        query: &str,
        page: i32,
        per_page: usize,
    ) -> Result<RepoSearchResponse>;

    /// 获取服务名称（用于日志）
    fn name(&self) -> &'static str;
}

struct SearchRequest {
    url: String,
    query: String,
    page: i32,
    per_page: usize,
    user_agent: String,
    token: Option<String>,
}

/// 基于 GitHub REST API 的搜索服务
#[derive(Clone)]
pub struct GithubService {
    agent: Agent,
    base_url: String,
    user_agent: String,
    token: Option<String>,
}

impl GithubService {
    pub fn new(config: &GithubConfig) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .build()
            .into();

        Self {
            agent,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            user_agent: config.user_agent.clone(),
            token: config.token.clone().filter(|t| !t.is_empty()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn search_url(&self) -> String {
        format!("{}{}", self.base_url, SEARCH_REPOSITORIES_PATH)
    }

    fn search_repos_sync(agent: &Agent, request: SearchRequest) -> Result<RepoSearchResponse> {
        let mut builder = agent
            .get(&request.url)
            .query("q", &request.query)
            .query("page", request.page.to_string())
            .query("per_page", request.per_page.to_string())
            .header("Accept", GITHUB_ACCEPT)
            .header("User-Agent", request.user_agent.as_str());

        if let Some(token) = request.token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }

        let resp = builder.call().map_err(|e| {
            debug!("Search request to \"{}\" failed: {}", request.url, e);
            PagerError::from(e)
        })?;

        let body = resp.into_body().read_to_string().map_err(|e| {
            debug!("Reading search response from \"{}\" failed: {}", request.url, e);
            PagerError::from(e)
        })?;

        let parsed: RepoSearchResponse = serde_json::from_str(&body)?;
        trace!(
            "Search page {} returned {} of {} items",
            request.page,
            parsed.items.len(),
            parsed.total_count
        );
        Ok(parsed)
    }
}

#[async_trait]
impl SearchService for GithubService {
    async fn search_repos(
        &self,
        query: &str,
        page: i32,
        per_page: usize,
    ) -> Result<RepoSearchResponse> {
        let request = SearchRequest {
            url: self.search_url(),
            query: query.to_string(),
            page,
            per_page,
            user_agent: self.user_agent.clone(),
            token: self.token.clone(),
        };
        let agent = self.agent.clone();

        trace!(
            "Searching repositories: q={:?} page={} per_page={}",
            query, page, per_page
        );

        tokio::task::spawn_blocking(move || GithubService::search_repos_sync(&agent, request))
            .await
            .map_err(|e| PagerError::transport(format!("search task failed: {}", e)))?
    }

    fn name(&self) -> &'static str {
        "GitHub"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = GithubConfig {
            api_base_url: "https://api.github.com/".to_string(),
            ..GithubConfig::default()
        };
        let service = GithubService::new(&config);
        assert_eq!(service.base_url(), "https://api.github.com");
        assert_eq!(
            service.search_url(),
            "https://api.github.com/search/repositories"
        );
    }

    #[test]
    fn test_empty_token_is_ignored() {
        let config = GithubConfig {
            token: Some(String::new()),
            ..GithubConfig::default()
        };
        let service = GithubService::new(&config);
        assert!(service.token.is_none());
    }

    /// 依赖外部网络服务，CI 环境可能失败
    #[tokio::test]
    #[ignore]
    async fn test_search_real_api() {
        let service = GithubService::new(&GithubConfig::default());
        let resp = service
            .search_repos("rust in:name,description", 1, 5)
            .await
            .unwrap();
        assert!(!resp.items.is_empty());
    }
}
