//! 分页契约中的数据类型
//!
//! 这些类型由宿主列表框架拥有，分页源只负责读取和构造它们。

use serde::{Deserialize, Serialize};

use crate::errors::PagerError;

/// 宿主请求的加载类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadType {
    /// 初次加载或失效后的重新加载
    Refresh,
    /// 向列表尾部追加
    Append,
    /// 向列表头部插入
    Prepend,
}

impl std::fmt::Display for LoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Refresh => write!(f, "refresh"),
            Self::Append => write!(f, "append"),
            Self::Prepend => write!(f, "prepend"),
        }
    }
}

/// 一次加载的参数
///
/// `key` 为 `None` 表示"第一页"，由分页源决定起始页。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadParams<K> {
    pub load_type: LoadType,
    pub key: Option<K>,
    pub load_size: usize,
}

impl<K> LoadParams<K> {
    pub fn refresh(key: Option<K>, load_size: usize) -> Self {
        Self {
            load_type: LoadType::Refresh,
            key,
            load_size,
        }
    }

    pub fn append(key: K, load_size: usize) -> Self {
        Self {
            load_type: LoadType::Append,
            key: Some(key),
            load_size,
        }
    }

    pub fn prepend(key: K, load_size: usize) -> Self {
        Self {
            load_type: LoadType::Prepend,
            key: Some(key),
            load_size,
        }
    }
}

/// 一页结果，边界处 `prev_key` / `next_key` 为空
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<K, V> {
    pub data: Vec<V>,
    pub prev_key: Option<K>,
    pub next_key: Option<K>,
}

impl<K, V> Page<K, V> {
    pub fn new(data: Vec<V>, prev_key: Option<K>, next_key: Option<K>) -> Self {
        Self {
            data,
            prev_key,
            next_key,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), None, None)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// 加载结果：成功带页，失败带原始错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadResult<K, V> {
    Page(Page<K, V>),
    Error(PagerError),
}

impl<K, V> LoadResult<K, V> {
    pub fn is_page(&self) -> bool {
        matches!(self, LoadResult::Page(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LoadResult::Error(_))
    }

    pub fn page(&self) -> Option<&Page<K, V>> {
        match self {
            LoadResult::Page(page) => Some(page),
            LoadResult::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&PagerError> {
        match self {
            LoadResult::Page(_) => None,
            LoadResult::Error(err) => Some(err),
        }
    }

    pub fn into_result(self) -> Result<Page<K, V>, PagerError> {
        match self {
            LoadResult::Page(page) => Ok(page),
            LoadResult::Error(err) => Err(err),
        }
    }
}

impl<K, V> From<Result<Page<K, V>, PagerError>> for LoadResult<K, V> {
    fn from(result: Result<Page<K, V>, PagerError>) -> Self {
        match result {
            Ok(page) => LoadResult::Page(page),
            Err(err) => LoadResult::Error(err),
        }
    }
}

/// 宿主侧分页配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingConfig {
    pub page_size: usize,
    pub initial_load_size: usize,
    /// 内存中最多保留的条目数，`None` 表示不限
    pub max_size: Option<usize>,
}

impl PagingConfig {
    /// 初次加载默认取三页
    pub const DEFAULT_INITIAL_LOAD_MULTIPLIER: usize = 3;

    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            initial_load_size: page_size * Self::DEFAULT_INITIAL_LOAD_MULTIPLIER,
            max_size: None,
        }
    }

    pub fn with_initial_load_size(mut self, initial_load_size: usize) -> Self {
        self.initial_load_size = initial_load_size;
        self
    }

    pub fn with_max_size(mut self, max_size: Option<usize>) -> Self {
        self.max_size = max_size;
        self
    }
}
