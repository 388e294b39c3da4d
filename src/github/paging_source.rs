//! GitHub 仓库搜索的分页源
//!
//! 每次加载取一页搜索结果，并计算前后页 key。

use std::sync::Arc;

use async_trait::async_trait;

use super::model::Repo;
use super::service::SearchService;
use crate::paging::{LoadParams, LoadResult, Page, PagingSource, PagingState};

/// GitHub 分页从 1 开始
pub const GITHUB_STARTING_PAGE_INDEX: i32 = 1;
/// 稳态下每次请求的条数
pub const NETWORK_PAGE_SIZE: usize = 50;
/// 追加到查询后面，限定在名称和描述中匹配
pub const IN_QUALIFIER: &str = " in:name,description";

pub struct GithubPagingSource {
    service: Arc<dyn SearchService>,
    query: String,
}

impl GithubPagingSource {
    pub fn new(service: Arc<dyn SearchService>, query: impl Into<String>) -> Self {
        Self {
            service,
            query: query.into(),
        }
    }

    /// 实际发送给 API 的查询串
    pub fn api_query(&self) -> String {
        format!("{}{}", self.query, IN_QUALIFIER)
    }
}

/// 计算下一页 key
///
/// 初次加载量是 `NETWORK_PAGE_SIZE` 的倍数，这里按倍数前进，
/// 避免第二次请求拿到重复条目。非整倍数时按整数除法截断。
/// 超出 `i32` 范围时视为没有下一页。
fn next_page_key(position: i32, load_size: usize, is_empty: bool) -> Option<i32> {
    if is_empty {
        return None;
    }
    let step = i32::try_from(load_size / NETWORK_PAGE_SIZE).ok()?;
    position.checked_add(step)
}

fn prev_page_key(position: i32) -> Option<i32> {
    if position == GITHUB_STARTING_PAGE_INDEX {
        None
    } else {
        position.checked_sub(1)
    }
}

#[async_trait]
impl PagingSource for GithubPagingSource {
    type Key = i32;
    type Value = Repo;

    async fn load(&self, params: LoadParams<i32>) -> LoadResult<i32, Repo> {
        let position = params.key.unwrap_or(GITHUB_STARTING_PAGE_INDEX);
        let api_query = self.api_query();

        match self
            .service
            .search_repos(&api_query, position, params.load_size)
            .await
        {
            Ok(response) => {
                let repos = response.items;
                let next_key = next_page_key(position, params.load_size, repos.is_empty());
                LoadResult::Page(Page::new(repos, prev_page_key(position), next_key))
            }
            Err(err) => LoadResult::Error(err),
        }
    }

    fn refresh_key(&self, state: &PagingState<i32, Repo>) -> Option<i32> {
        let anchor_position = state.anchor_position?;
        let page = state.closest_page_to_position(anchor_position)?;
        match (page.prev_key, page.next_key) {
            (Some(prev_key), _) => prev_key.checked_add(1),
            (None, Some(next_key)) => next_key.checked_sub(1),
            (None, None) => None,
        }
    }
}
