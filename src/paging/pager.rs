//! 最小化的宿主驱动
//!
//! 按列表框架的方式驱动一个 [`PagingSource`]：初次加载、向后/向前翻页、
//! 失效后从刷新 key 重新加载。加载通过 `&mut self` 串行执行，
//! 不做重试和缓存，失败原样返回给调用方。

use std::sync::Arc;

use tracing::{debug, trace};

use super::source::PagingSource;
use super::state::PagingState;
use super::types::{LoadParams, LoadResult, Page, PagingConfig};
use crate::errors::Result;

/// 一次驱动操作的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// 成功加载了 `count` 条
    Loaded { count: usize },
    /// 该方向已没有更多数据
    EndReached,
}

pub struct Pager<S: PagingSource> {
    source: Arc<S>,
    config: PagingConfig,
    pages: Vec<Page<S::Key, S::Value>>,
    /// 因 `max_size` 从头部丢弃的条目数
    leading_placeholder_count: usize,
}

impl<S: PagingSource> Pager<S> {
    pub fn new(source: Arc<S>, config: PagingConfig) -> Self {
        Self {
            source,
            config,
            pages: Vec::new(),
            leading_placeholder_count: 0,
        }
    }

    pub fn config(&self) -> &PagingConfig {
        &self.config
    }

    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    pub fn pages(&self) -> &[Page<S::Key, S::Value>] {
        &self.pages
    }

    pub fn items(&self) -> impl Iterator<Item = &S::Value> {
        self.pages.iter().flat_map(|page| page.data.iter())
    }

    pub fn item_count(&self) -> usize {
        self.pages.iter().map(Page::len).sum()
    }

    pub fn leading_placeholder_count(&self) -> usize {
        self.leading_placeholder_count
    }

    /// 丢弃已加载数据并从 `initial_key` 重新加载
    ///
    /// 失败时保留原有数据。
    pub async fn refresh(&mut self, initial_key: Option<S::Key>) -> Result<LoadOutcome> {
        let params = LoadParams::refresh(initial_key, self.config.initial_load_size);

        let page = self.run_load(params).await?;
        let count = page.len();

        self.pages.clear();
        self.leading_placeholder_count = 0;
        self.pages.push(page);

        Ok(LoadOutcome::Loaded { count })
    }

    /// 按最后一页的 `next_key` 向后加载
    pub async fn append(&mut self) -> Result<LoadOutcome> {
        let Some(last) = self.pages.last() else {
            return self.refresh(None).await;
        };
        let Some(next_key) = last.next_key.clone() else {
            trace!("Append requested but the last page has no next key");
            return Ok(LoadOutcome::EndReached);
        };

        let params = LoadParams::append(next_key, self.config.page_size);
        let page = self.run_load(params).await?;
        let count = page.len();

        self.pages.push(page);
        self.trim_front();

        Ok(LoadOutcome::Loaded { count })
    }

    /// 按第一页的 `prev_key` 向前加载
    pub async fn prepend(&mut self) -> Result<LoadOutcome> {
        let Some(first) = self.pages.first() else {
            return self.refresh(None).await;
        };
        let Some(prev_key) = first.prev_key.clone() else {
            trace!("Prepend requested but the first page has no previous key");
            return Ok(LoadOutcome::EndReached);
        };

        let params = LoadParams::prepend(prev_key, self.config.page_size);
        let page = self.run_load(params).await?;
        let count = page.len();

        self.leading_placeholder_count = self.leading_placeholder_count.saturating_sub(count);
        self.pages.insert(0, page);
        self.trim_back();

        Ok(LoadOutcome::Loaded { count })
    }

    async fn run_load(
        &self,
        params: LoadParams<S::Key>,
    ) -> Result<Page<S::Key, S::Value>> {
        let load_type = params.load_type;
        let load_size = params.load_size;

        match self.source.load(params).await {
            LoadResult::Page(page) => {
                debug!(
                    "{} load of {} returned {} items",
                    load_type,
                    load_size,
                    page.len()
                );
                Ok(page)
            }
            LoadResult::Error(err) => {
                debug!("{} load of {} failed: {}", load_type, load_size, err);
                Err(err)
            }
        }
    }

    /// 超过 `max_size` 时从头部丢页，至少保留一页
    fn trim_front(&mut self) {
        let Some(max_size) = self.config.max_size else {
            return;
        };
        while self.pages.len() > 1 && self.item_count() > max_size {
            let dropped = self.pages.remove(0);
            self.leading_placeholder_count += dropped.len();
            trace!("Dropped {} items from the front", dropped.len());
        }
    }

    /// 超过 `max_size` 时从尾部丢页，至少保留一页
    fn trim_back(&mut self) {
        let Some(max_size) = self.config.max_size else {
            return;
        };
        while self.pages.len() > 1 && self.item_count() > max_size {
            if let Some(dropped) = self.pages.pop() {
                trace!("Dropped {} items from the back", dropped.len());
            }
        }
    }
}

impl<S> Pager<S>
where
    S: PagingSource,
    S::Value: Clone,
{
    /// 以 `anchor_position` 构造当前快照
    pub fn snapshot(&self, anchor_position: Option<usize>) -> PagingState<S::Key, S::Value> {
        PagingState::new(
            self.pages.clone(),
            anchor_position,
            self.config.clone(),
            self.leading_placeholder_count,
        )
    }

    /// 数据失效：向分页源要刷新 key，并从该 key 重新加载
    pub async fn invalidate(&mut self, anchor_position: Option<usize>) -> Result<LoadOutcome> {
        let state = self.snapshot(anchor_position);
        let key = self.source.refresh_key(&state);
        debug!(
            "Invalidated at anchor {:?}, refreshing from {}",
            anchor_position,
            if key.is_some() { "resolved key" } else { "first page" }
        );
        self.refresh(key).await
    }
}
