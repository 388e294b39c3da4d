//! GitHub 仓库搜索
//!
//! - `model`: API 响应模型
//! - `service`: 搜索服务接口及基于 HTTP 的实现
//! - `paging_source`: 把搜索接口接入分页契约

mod model;
mod paging_source;
mod service;

pub use model::{Repo, RepoSearchResponse};
pub use paging_source::{
    GITHUB_STARTING_PAGE_INDEX, GithubPagingSource, IN_QUALIFIER, NETWORK_PAGE_SIZE,
};
pub use service::{GithubService, SearchService};
