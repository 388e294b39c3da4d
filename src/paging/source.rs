use async_trait::async_trait;

use super::state::PagingState;
use super::types::{LoadParams, LoadResult};

/// 分页源能力接口
///
/// 宿主框架负责调度：同一个 key 同时最多只有一个加载在进行，
/// 实现方不需要做任何加锁、去重或重试。
#[async_trait]
pub trait PagingSource: Send + Sync {
    type Key: Clone + Send + Sync;
    type Value: Send + Sync;

    /// 加载一页数据，失败时返回 `LoadResult::Error` 而不是向上抛出
    async fn load(&self, params: LoadParams<Self::Key>) -> LoadResult<Self::Key, Self::Value>;

    /// 失效后根据快照计算重新加载的起始 key
    fn refresh_key(&self, state: &PagingState<Self::Key, Self::Value>) -> Option<Self::Key>;
}
