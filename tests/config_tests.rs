use repo_pager::config::{
    GithubConfig, StaticConfig, get_config, init_config_from, set_config,
};
use repo_pager::errors::PagerError;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pager.toml");
    std::fs::write(&path, content).unwrap();
    let path = path.display().to_string();
    (dir, path)
}

#[test]
fn test_load_from_file() {
    let (_dir, path) = write_config(
        r#"
        [github]
        api_base_url = "http://127.0.0.1:9000"
        timeout_secs = 3

        [paging]
        page_size = 20
        initial_load_multiplier = 2
        max_size = 200

        [logging]
        level = "debug"
        format = "json"
        "#,
    );

    let config = StaticConfig::load_from(&path).unwrap();
    assert_eq!(config.github.api_base_url, "http://127.0.0.1:9000");
    assert_eq!(config.github.timeout_secs, 3);
    assert!(config.github.token.is_none());
    assert_eq!(config.logging.format, "json");

    let paging = config.paging.to_paging_config();
    assert_eq!(paging.page_size, 20);
    assert_eq!(paging.initial_load_size, 40);
    assert_eq!(paging.max_size, Some(200));
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml").display().to_string();

    let config = StaticConfig::load_from(&path).unwrap();
    assert_eq!(config.github, GithubConfig::default());
    assert_eq!(config.paging.page_size, 50);
}

#[test]
fn test_invalid_page_size_rejected() {
    let (_dir, path) = write_config("[paging]\npage_size = 500\n");

    let err = StaticConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, PagerError::Validation(_)));
    assert!(err.to_string().contains("per_page"));

    // 宽松加载回退到默认值
    assert_eq!(StaticConfig::load(&path), StaticConfig::default());
}

#[test]
fn test_invalid_base_url_rejected() {
    let (_dir, path) = write_config("[github]\napi_base_url = \"ftp://example.com\"\n");

    let err = StaticConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, PagerError::Validation(_)));
}

#[test]
fn test_malformed_toml_is_config_error() {
    let (_dir, path) = write_config("[paging\npage_size = ");

    let err = StaticConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, PagerError::Config(_)));
}

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out").join("config.toml");

    let mut config = StaticConfig::default();
    config.paging.page_size = 30;
    config.save_to_file(&path).unwrap();

    let loaded = StaticConfig::load_from(&path.display().to_string()).unwrap();
    assert_eq!(loaded.paging.page_size, 30);
}

#[test]
fn test_global_config() {
    let (_dir, path) = write_config("[paging]\npage_size = 25\n");
    init_config_from(&path);
    assert_eq!(get_config().paging.page_size, 25);

    let mut replaced = StaticConfig::default();
    replaced.paging.page_size = 10;
    set_config(replaced);
    assert_eq!(get_config().paging.page_size, 10);
}

#[test]
fn test_env_overrides_file() {
    let (_dir, path) = write_config("[logging]\nmax_backups = 2\n");

    // 只有本测试读写该变量
    unsafe {
        std::env::set_var("RP__LOGGING__MAX_BACKUPS", "9");
    }
    let config = StaticConfig::load_from(&path);
    unsafe {
        std::env::remove_var("RP__LOGGING__MAX_BACKUPS");
    }

    assert_eq!(config.unwrap().logging.max_backups, 9);
}
