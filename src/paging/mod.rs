//! 分页契约
//!
//! - `types`: 宿主框架拥有的数据类型（加载参数、页、加载结果、配置）
//! - `state`: 已加载页面的快照，用于计算刷新 key
//! - `source`: 分页源能力接口
//! - `pager`: 最小化的宿主驱动

pub mod pager;
pub mod source;
pub mod state;
pub mod types;

pub use pager::{LoadOutcome, Pager};
pub use source::PagingSource;
pub use state::PagingState;
pub use types::{LoadParams, LoadResult, LoadType, Page, PagingConfig};
