//! Integration tests for the SoftwareRegistry public interface.
//!
//! These tests run against real catalog files in a temp directory, laid out
//! the way an installation lays them out.

use software_core::{
    AppDirs, CacheState, MemoryFileSystem, SoftwareError, SoftwareRegistry, SoftwareType,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

const NGINX_CATALOG: &str = r#"[
    {"Name": "Nginx", "Type": "Server", "DirName": "nginx-1.2", "Icon": "nginx.png",
     "ServerConfPath": "conf/nginx.conf"}
]"#;

const BASE_CATALOG: &str = r#"[
    {"Name": "PHP-8.2", "Type": "PHP", "DirName": "php-8.2", "Icon": "php.png",
     "ConfPath": "php.ini", "ServerProcessPath": "php-fpm"},
    {"Name": "Nginx", "Type": "Server", "DirName": "nginx-1.2", "Icon": "nginx.png",
     "ServerConfPath": "conf/nginx.conf", "ServerProcessPath": "nginx"},
    {"Name": "Composer", "Type": "Tool", "DirName": "composer", "Icon": "composer.png"}
]"#;

const CUSTOM_CATALOG: &str = r#"[
    {"Name": "Nginx", "Type": "Server", "DirName": "nginx-custom", "Icon": "my-nginx.png"},
    {"Name": "Redis", "Type": "Database", "DirName": "redis-7", "Icon": "redis.png"}
]"#;

/// Test installation with a core dir and a user core dir.
struct TestEnv {
    _temp_dir: TempDir,
    core_dir: PathBuf,
    user_dir: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let core_dir = temp_dir.path().join("core");
        let user_dir = temp_dir.path().join("user");
        std::fs::create_dir_all(&core_dir).unwrap();
        std::fs::create_dir_all(&user_dir).unwrap();
        Self {
            _temp_dir: temp_dir,
            core_dir,
            user_dir,
        }
    }

    fn base_catalog_path(&self) -> PathBuf {
        self.core_dir.join("config/software/software.json")
    }

    fn custom_catalog_path(&self) -> PathBuf {
        self.user_dir.join("custom/software/software.json")
    }

    fn write(path: &Path, content: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    fn write_base(&self, content: &str) {
        Self::write(&self.base_catalog_path(), content);
    }

    fn write_custom(&self, content: &str) {
        Self::write(&self.custom_catalog_path(), content);
    }

    fn registry(&self) -> SoftwareRegistry {
        SoftwareRegistry::builder(&self.core_dir)
            .user_core_dir(&self.user_dir)
            .build()
            .expect("Failed to build registry")
    }
}

fn file_url(path: &Path) -> String {
    format!("file://{}", path.display())
}

#[tokio::test]
async fn test_nginx_scenario() {
    let env = TestEnv::new();
    env.write_base(NGINX_CATALOG);
    let registry = env.registry();

    let list = registry.get_list().await.unwrap();
    assert_eq!(list.len(), 1);

    let nginx = &list[0];
    assert_eq!(
        nginx.icon,
        file_url(&env.core_dir.join("config/software/icon").join("nginx.png"))
    );
    #[cfg(unix)]
    assert!(nginx.icon.ends_with("/config/software/icon/nginx.png"));

    assert_eq!(
        registry.get_server_conf_path(nginx).unwrap(),
        registry
            .app_dirs()
            .server_type_dir()
            .join("nginx-1.2")
            .join("conf/nginx.conf")
    );
}

#[tokio::test]
async fn test_base_only_keeps_order_and_rewrites_icons() {
    let env = TestEnv::new();
    env.write_base(BASE_CATALOG);
    let registry = env.registry();

    let list = registry.get_list().await.unwrap();
    let names: Vec<_> = list.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["PHP-8.2", "Nginx", "Composer"]);

    let icon_dir = registry.get_icon_path();
    for (item, icon) in list.iter().zip(["php.png", "nginx.png", "composer.png"]) {
        assert_eq!(item.icon, file_url(&icon_dir.join(icon)));
    }
}

#[tokio::test]
async fn test_custom_catalog_is_appended() {
    let env = TestEnv::new();
    env.write_base(BASE_CATALOG);
    env.write_custom(CUSTOM_CATALOG);
    let registry = env.registry();

    let list = registry.get_list().await.unwrap();
    let names: Vec<_> = list.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["PHP-8.2", "Nginx", "Composer", "Nginx", "Redis"]);

    // Custom entries point at the custom icon directory
    let custom_icons = env.user_dir.join("custom/software/icon");
    assert_eq!(list[3].icon, file_url(&custom_icons.join("my-nginx.png")));
    assert_eq!(list[4].icon, file_url(&custom_icons.join("redis.png")));
}

#[tokio::test]
async fn test_find_item_first_match_wins() {
    let env = TestEnv::new();
    env.write_base(BASE_CATALOG);
    env.write_custom(CUSTOM_CATALOG);
    let registry = env.registry();

    let nginx = registry.find_item("Nginx").await.unwrap().unwrap();
    assert_eq!(nginx.dir_name, "nginx-1.2");
    assert!(registry.find_item("Apache").await.unwrap().is_none());
}

#[tokio::test]
async fn test_unrecognized_type_resolves_to_dir_name() {
    let env = TestEnv::new();
    env.write_base(BASE_CATALOG);
    env.write_custom(CUSTOM_CATALOG);
    let registry = env.registry();

    let redis = registry.find_item("Redis").await.unwrap().unwrap();
    assert_eq!(
        redis.software_type,
        SoftwareType::Unrecognized("Database".to_string())
    );
    assert_eq!(registry.get_path(redis), PathBuf::from("redis-7"));
}

#[tokio::test]
async fn test_unrecognized_type_keeps_absolute_dir_name() {
    let env = TestEnv::new();
    env.write_base(
        r#"[{"Name": "Redis", "Type": "Database", "DirName": "/opt/redis", "Icon": "redis.png"}]"#,
    );
    let registry = env.registry();

    let redis = registry.find_item("Redis").await.unwrap().unwrap();
    assert_eq!(registry.get_path(redis), PathBuf::from("/opt/redis"));
}

#[tokio::test]
async fn test_empty_base_catalog_reloads_until_populated() {
    let env = TestEnv::new();
    env.write_base("[]");
    let registry = env.registry();

    assert!(registry.get_list().await.unwrap().is_empty());
    assert_eq!(registry.cache_state(), CacheState::Empty);

    env.write_custom(CUSTOM_CATALOG);
    let list = registry.get_list().await.unwrap();
    let names: Vec<_> = list.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Nginx", "Redis"]);
    assert_eq!(registry.cache_state(), CacheState::Populated);
}

#[tokio::test]
async fn test_missing_base_catalog_fails() {
    let env = TestEnv::new();
    let registry = env.registry();

    let err = registry.get_list().await.unwrap_err();
    assert_eq!(err.config_path(), Some(env.base_catalog_path().as_path()));
    assert_eq!(registry.cache_state(), CacheState::Empty);
}

#[tokio::test]
async fn test_invalid_custom_catalog_then_retry() {
    let env = TestEnv::new();
    env.write_base(BASE_CATALOG);
    env.write_custom("[{ this is not json");
    let registry = env.registry();

    match registry.get_list().await {
        Err(SoftwareError::Config { path, .. }) => assert_eq!(path, env.custom_catalog_path()),
        other => panic!("expected config error, got {other:?}"),
    }
    assert_eq!(registry.cache_state(), CacheState::Empty);

    env.write_custom(CUSTOM_CATALOG);
    assert_eq!(registry.get_list().await.unwrap().len(), 5);
    assert_eq!(registry.cache_state(), CacheState::Populated);
}

#[tokio::test]
async fn test_cached_list_ignores_later_file_changes() {
    let env = TestEnv::new();
    env.write_base(BASE_CATALOG);
    let registry = env.registry();

    assert_eq!(registry.get_list().await.unwrap().len(), 3);

    env.write_custom(CUSTOM_CATALOG);
    std::fs::remove_file(env.base_catalog_path()).unwrap();
    assert_eq!(registry.get_list().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_conf_paths() {
    let env = TestEnv::new();
    env.write_base(BASE_CATALOG);
    let registry = env.registry();

    let php = registry.find_item("PHP-8.2").await.unwrap().unwrap();
    let php_dir = registry.app_dirs().php_type_dir().join("php-8.2");
    assert_eq!(registry.get_path(php), php_dir);
    assert_eq!(registry.get_conf_path(php).unwrap(), php_dir.join("php.ini"));
    assert_eq!(
        registry.get_server_process_path(php).unwrap(),
        php_dir.join("php-fpm")
    );

    let composer = registry.find_item("Composer").await.unwrap().unwrap();
    assert_eq!(
        registry.get_path(composer),
        registry.app_dirs().tool_type_dir().join("composer")
    );
    for result in [
        registry.get_conf_path(composer),
        registry.get_server_conf_path(composer),
        registry.get_server_process_path(composer),
    ] {
        assert!(matches!(result, Err(SoftwareError::MissingField { .. })));
    }
}

#[tokio::test]
async fn test_installation_state_is_live() {
    let env = TestEnv::new();
    env.write_base(BASE_CATALOG);
    let registry = env.registry();

    assert!(!registry.dir_exists().await);
    let nginx = registry.find_item("Nginx").await.unwrap().unwrap();
    assert!(!registry.is_installed(nginx).await);

    std::fs::create_dir_all(registry.get_path(nginx)).unwrap();
    assert!(registry.dir_exists().await);
    assert!(registry.is_installed(nginx).await);

    let installed = registry.get_installed_list().await.unwrap();
    assert_eq!(installed.len(), 1);
    assert_eq!(installed[0].name, "Nginx");

    std::fs::remove_dir_all(registry.get_path(nginx)).unwrap();
    assert!(!registry.is_installed(nginx).await);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_first_calls_load_once() {
    let fs = Arc::new(MemoryFileSystem::new());
    fs.write_file("/core/config/software/software.json", BASE_CATALOG);
    let registry = Arc::new(
        SoftwareRegistry::builder("/core")
            .user_core_dir("/user")
            .file_system(fs.clone())
            .build()
            .unwrap(),
    );

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let registry = registry.clone();
            tokio::spawn(async move { registry.get_list().await.map(|list| list.len()) })
        })
        .collect();

    for result in futures::future::join_all(tasks).await {
        assert_eq!(result.unwrap().unwrap(), 3);
    }
    assert_eq!(fs.read_count(), 1);
    assert_eq!(fs.exists_count(), 1);
}
