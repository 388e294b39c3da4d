use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// 读取全局配置快照
///
/// 调用前必须先执行 `init_config_from` 或 `set_config`。
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get()
        .expect("config not initialized; call init_config_from() first")
        .load_full()
}

/// 从指定路径加载全局配置
///
/// 只有第一次调用会读取文件，之后的调用不生效。
pub fn init_config_from(path: &str) {
    CONFIG.get_or_init(|| ArcSwap::from_pointee(StaticConfig::load(path)));
}

/// 替换全局配置
pub fn set_config(config: StaticConfig) {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::default()))
        .store(Arc::new(config));
}
