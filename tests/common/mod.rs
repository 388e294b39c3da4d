//! 集成测试共用的模拟搜索服务

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use repo_pager::errors::{PagerError, Result};
use repo_pager::github::{Repo, RepoSearchResponse, SearchService};

pub fn repo(id: u64) -> Repo {
    Repo {
        id,
        name: format!("repo-{}", id),
        full_name: format!("owner/repo-{}", id),
        description: Some(format!("Repository number {}", id)),
        html_url: format!("https://github.com/owner/repo-{}", id),
        stargazers_count: id * 10,
        forks_count: id,
        language: Some("Rust".to_string()),
    }
}

/// 模拟 GitHub 分页：数据集为 id 0..total，
/// 第 page 页（从 1 开始）返回 [(page-1)*per_page, page*per_page) 区间
pub struct MockSearchService {
    total: u64,
    /// 不论请求哪一页都返回这些条目
    fixed_items: Option<Vec<Repo>>,
    calls: Mutex<Vec<(String, i32, usize)>>,
    fail_with: Mutex<Option<PagerError>>,
}

impl MockSearchService {
    pub fn new(total: u64) -> Self {
        Self {
            total,
            fixed_items: None,
            calls: Mutex::new(Vec::new()),
            fail_with: Mutex::new(None),
        }
    }

    pub fn with_fixed_items(items: Vec<Repo>) -> Self {
        let mut service = Self::new(items.len() as u64);
        service.fixed_items = Some(items);
        service
    }

    pub fn failing(err: PagerError) -> Self {
        let service = Self::new(0);
        service.set_failure(Some(err));
        service
    }

    pub fn set_failure(&self, err: Option<PagerError>) {
        *self.fail_with.lock().unwrap() = err;
    }

    pub fn calls(&self) -> Vec<(String, i32, usize)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> Option<(String, i32, usize)> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl SearchService for MockSearchService {
    async fn search_repos(
        &self,
        query: &str,
        page: i32,
        per_page: usize,
    ) -> Result<RepoSearchResponse> {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), page, per_page));

        if let Some(err) = self.fail_with.lock().unwrap().clone() {
            return Err(err);
        }

        if let Some(ref items) = self.fixed_items {
            return Ok(RepoSearchResponse {
                total_count: self.total,
                incomplete_results: false,
                items: items.clone(),
            });
        }

        let per_page = per_page as u64;
        let start = (page.max(1) as u64 - 1) * per_page;
        let end = (start + per_page).min(self.total);
        let items = (start..end.max(start)).map(repo).collect();

        Ok(RepoSearchResponse {
            total_count: self.total,
            incomplete_results: false,
            items,
        })
    }

    fn name(&self) -> &'static str {
        "Mock"
    }
}
