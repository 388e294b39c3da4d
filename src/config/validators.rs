//! 配置值验证

use url::Url;

use super::structs::StaticConfig;
use crate::errors::{PagerError, Result};

/// GitHub 搜索接口允许的最大 per_page
pub const GITHUB_MAX_PER_PAGE: usize = 100;

const VALID_LOG_FORMATS: [&str; 2] = ["text", "json"];

/// 校验 API 地址：必须是 http/https 绝对地址
pub fn validate_base_url(value: &str) -> std::result::Result<(), String> {
    let url = Url::parse(value).map_err(|e| format!("Invalid API base URL '{}': {}", value, e))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!(
            "Invalid API base URL scheme '{}'. Valid: http, https",
            other
        )),
    }
}

pub fn validate_page_size(value: usize) -> std::result::Result<(), String> {
    if value == 0 {
        return Err("page_size must be greater than 0".to_string());
    }
    if value > GITHUB_MAX_PER_PAGE {
        return Err(format!(
            "page_size {} exceeds GitHub's per_page limit of {}",
            value, GITHUB_MAX_PER_PAGE
        ));
    }
    Ok(())
}

pub fn validate_log_format(value: &str) -> std::result::Result<(), String> {
    if VALID_LOG_FORMATS.contains(&value) {
        Ok(())
    } else {
        Err(format!(
            "Invalid log format: '{}'. Valid: {}",
            value,
            VALID_LOG_FORMATS.join(", ")
        ))
    }
}

/// 校验整个静态配置
pub fn validate_static_config(config: &StaticConfig) -> Result<()> {
    validate_base_url(&config.github.api_base_url).map_err(PagerError::validation)?;
    validate_page_size(config.paging.page_size).map_err(PagerError::validation)?;
    if config.paging.initial_load_multiplier == 0 {
        return Err(PagerError::validation(
            "initial_load_multiplier must be greater than 0",
        ));
    }
    validate_log_format(&config.logging.format).map_err(PagerError::validation)?;
    Ok(())
}
