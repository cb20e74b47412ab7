//! Layered configuration: defaults, global file, workspace files, environment.

use super::test_utils::with_isolated_env;
use plans_client::config::{ConfigLoader, DEFAULT_API_BASE};
use plans_client::{PlansApi, PlansClient};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_global(test_dir: &TempDir, contents: &str) {
    let dir = test_dir.path().join("config").join("plans");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), contents).unwrap();
}

fn write_workspace(workspace: &Path, name: &str, contents: &str) {
    let dir = workspace.join("config");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), contents).unwrap();
}

#[test]
fn test_defaults_without_any_source() {
    let test_dir = TempDir::new().unwrap();
    let workspace = test_dir.path().join("ws");
    fs::create_dir_all(&workspace).unwrap();

    with_isolated_env(&test_dir, || {
        let config = ConfigLoader::load(&workspace).unwrap();
        assert_eq!(config.api.api_base, DEFAULT_API_BASE);
        assert_eq!(config.logging.output, "stderr");
    });
}

#[test]
fn test_global_config_path_uses_xdg_config_home() {
    let test_dir = TempDir::new().unwrap();
    with_isolated_env(&test_dir, || {
        let path = ConfigLoader::global_config_path().unwrap();
        assert_eq!(
            path,
            test_dir.path().join("config").join("plans").join("config.toml")
        );
    });
}

#[test]
fn test_global_config_is_applied() {
    let test_dir = TempDir::new().unwrap();
    let workspace = test_dir.path().join("ws");
    fs::create_dir_all(&workspace).unwrap();
    write_global(
        &test_dir,
        r#"
[api]
api_base = "http://global.example:9000"

[logging]
level = "warn"
"#,
    );

    with_isolated_env(&test_dir, || {
        let config = ConfigLoader::load(&workspace).unwrap();
        assert_eq!(config.api.api_base, "http://global.example:9000");
        assert_eq!(config.logging.level, "warn");
    });
}

#[test]
fn test_workspace_config_overrides_global_config() {
    let test_dir = TempDir::new().unwrap();
    let workspace = test_dir.path().join("ws");
    write_global(
        &test_dir,
        r#"
[api]
api_base = "http://global.example:9000"

[logging]
level = "warn"
"#,
    );
    write_workspace(
        &workspace,
        "config.toml",
        r#"
[api]
api_base = "http://workspace.example:9001"
"#,
    );

    with_isolated_env(&test_dir, || {
        let config = ConfigLoader::load(&workspace).unwrap();
        assert_eq!(config.api.api_base, "http://workspace.example:9001");
        // Keys the workspace file does not set still come from the global file.
        assert_eq!(config.logging.level, "warn");
    });
}

#[test]
fn test_env_specific_workspace_file() {
    let test_dir = TempDir::new().unwrap();
    let workspace = test_dir.path().join("ws");
    write_workspace(
        &workspace,
        "config.toml",
        "[api]\napi_base = \"http://base.example\"\n",
    );
    write_workspace(
        &workspace,
        "staging.toml",
        "[api]\napi_base = \"http://staging.example\"\n",
    );
    write_workspace(
        &workspace,
        "development.toml",
        "[api]\napi_base = \"http://dev.example\"\n",
    );

    with_isolated_env(&test_dir, || {
        let config = ConfigLoader::load(&workspace).unwrap();
        assert_eq!(config.api.api_base, "http://dev.example");

        std::env::set_var("PLANS_ENV", "staging");
        let config = ConfigLoader::load(&workspace).unwrap();
        assert_eq!(config.api.api_base, "http://staging.example");
    });
}

#[test]
fn test_api_base_env_overrides_files() {
    let test_dir = TempDir::new().unwrap();
    let workspace = test_dir.path().join("ws");
    write_workspace(
        &workspace,
        "config.toml",
        "[api]\napi_base = \"http://workspace.example\"\n",
    );

    with_isolated_env(&test_dir, || {
        std::env::set_var("API_BASE", "http://localhost:8002");
        let config = ConfigLoader::load(&workspace).unwrap();
        assert_eq!(config.api.api_base, "http://localhost:8002");

        // Empty values are treated as unset.
        std::env::set_var("API_BASE", "");
        let config = ConfigLoader::load(&workspace).unwrap();
        assert_eq!(config.api.api_base, "http://workspace.example");
    });
}

#[test]
fn test_load_from_file_skips_other_files() {
    let test_dir = TempDir::new().unwrap();
    let workspace = test_dir.path().join("ws");
    write_workspace(
        &workspace,
        "config.toml",
        "[api]\napi_base = \"http://workspace.example\"\n",
    );
    let explicit = test_dir.path().join("explicit.toml");
    fs::write(&explicit, "[logging]\nformat = \"json\"\n").unwrap();

    with_isolated_env(&test_dir, || {
        let config = ConfigLoader::load_from_file(&explicit).unwrap();
        assert_eq!(config.api.api_base, DEFAULT_API_BASE);
        assert_eq!(config.logging.format, "json");
    });
}

#[test]
fn test_load_from_missing_file_fails() {
    let test_dir = TempDir::new().unwrap();
    with_isolated_env(&test_dir, || {
        let err = ConfigLoader::load_from_file(&test_dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    });
}

#[test]
fn test_loaded_config_drives_client_base_url() {
    let test_dir = TempDir::new().unwrap();
    let workspace = test_dir.path().join("ws");
    write_workspace(
        &workspace,
        "config.toml",
        "[api]\napi_base = \"http://10.1.2.3:8080/\"\n",
    );

    with_isolated_env(&test_dir, || {
        let config = ConfigLoader::load(&workspace).unwrap();
        let client = PlansClient::new(&config.api).unwrap();
        assert_eq!(client.base_url(), "http://10.1.2.3:8080");
    });
}

#[test]
fn test_empty_configured_base_falls_back_to_loopback() {
    let test_dir = TempDir::new().unwrap();
    let workspace = test_dir.path().join("ws");
    write_workspace(&workspace, "config.toml", "[api]\napi_base = \"\"\n");

    with_isolated_env(&test_dir, || {
        let config = ConfigLoader::load(&workspace).unwrap();
        assert!(config.validate().is_ok());
        let client = PlansClient::new(&config.api).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
    });
}
