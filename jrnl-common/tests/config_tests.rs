//! Unit tests for configuration resolution
//!
//! Covers:
//! - Missing TOML file falls back to defaults
//! - Malformed TOML is a configuration error
//! - CLI → ENV → TOML → default priority
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.

use jrnl_common::config::{
    load_toml_config, resolve, ConfigOverrides, TomlConfig, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS,
    ENV_LOG_LEVEL, ENV_PORT, ENV_STORE_TOKEN, ENV_STORE_URL,
};
use jrnl_common::Error;
use serial_test::serial;
use std::env;
use std::time::Duration;

fn clear_env() {
    env::remove_var(ENV_STORE_URL);
    env::remove_var(ENV_STORE_TOKEN);
    env::remove_var(ENV_PORT);
    env::remove_var(ENV_LOG_LEVEL);
}

fn toml_with_url(url: &str) -> TomlConfig {
    toml::from_str(&format!("[store]\nbase_url = \"{}\"\n", url)).unwrap()
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_toml_config(&dir.path().join("absent.toml")).unwrap();

    assert!(config.store.base_url.is_none());
    assert_eq!(config.store.timeout_secs, DEFAULT_TIMEOUT_SECS);
    assert_eq!(config.logging.level, "info");
    assert!(config.port.is_none());
}

#[test]
fn test_full_file_parses() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jrnl-api.toml");
    std::fs::write(
        &path,
        r#"
port = 6000

[store]
base_url = "https://store.example.com/v1"
api_token = "secret"
timeout_secs = 5

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = load_toml_config(&path).unwrap();
    assert_eq!(config.port, Some(6000));
    assert_eq!(config.store.base_url.as_deref(), Some("https://store.example.com/v1"));
    assert_eq!(config.store.api_token.as_deref(), Some("secret"));
    assert_eq!(config.store.timeout_secs, 5);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_malformed_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "port = \"not a number\"\n[store").unwrap();

    let result = load_toml_config(&path);
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
#[serial]
fn test_resolve_requires_store_url() {
    clear_env();

    let result = resolve(&ConfigOverrides::default(), &TomlConfig::default());
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
#[serial]
fn test_resolve_rejects_non_http_url() {
    clear_env();

    let result = resolve(&ConfigOverrides::default(), &toml_with_url("ftp://example.com"));
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
#[serial]
fn test_resolve_uses_toml_then_defaults() {
    clear_env();

    let config = resolve(
        &ConfigOverrides::default(),
        &toml_with_url("https://toml.example.com/"),
    )
    .unwrap();

    assert_eq!(config.store_url, "https://toml.example.com");
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    assert!(config.api_token.is_none());
    assert_eq!(config.log_level, "info");
}

#[test]
#[serial]
fn test_env_overrides_toml() {
    clear_env();
    env::set_var(ENV_STORE_URL, "https://env.example.com");
    env::set_var(ENV_STORE_TOKEN, "env-token");
    env::set_var(ENV_PORT, "7001");

    let config = resolve(
        &ConfigOverrides::default(),
        &toml_with_url("https://toml.example.com"),
    )
    .unwrap();

    assert_eq!(config.store_url, "https://env.example.com");
    assert_eq!(config.api_token.as_deref(), Some("env-token"));
    assert_eq!(config.port, 7001);

    clear_env();
}

#[test]
#[serial]
fn test_cli_overrides_env() {
    clear_env();
    env::set_var(ENV_STORE_URL, "https://env.example.com");
    env::set_var(ENV_PORT, "7001");

    let overrides = ConfigOverrides {
        store_url: Some("https://cli.example.com".to_string()),
        api_token: Some("cli-token".to_string()),
        port: Some(7002),
        log_level: None,
    };
    let config = resolve(&overrides, &TomlConfig::default()).unwrap();

    assert_eq!(config.store_url, "https://cli.example.com");
    assert_eq!(config.api_token.as_deref(), Some("cli-token"));
    assert_eq!(config.port, 7002);

    clear_env();
}

#[test]
#[serial]
fn test_blank_values_fall_through() {
    clear_env();
    env::set_var(ENV_STORE_URL, "   ");

    let overrides = ConfigOverrides {
        store_url: Some(String::new()),
        ..Default::default()
    };
    let config = resolve(&overrides, &toml_with_url("https://toml.example.com")).unwrap();
    assert_eq!(config.store_url, "https://toml.example.com");

    clear_env();
}

#[test]
#[serial]
fn test_invalid_port_env_is_config_error() {
    clear_env();
    env::set_var(ENV_PORT, "eighty");

    let result = resolve(
        &ConfigOverrides::default(),
        &toml_with_url("https://toml.example.com"),
    );
    assert!(matches!(result, Err(Error::Config(_))));

    clear_env();
}

#[test]
#[serial]
fn test_log_level_priority() {
    clear_env();
    let mut toml_config = toml_with_url("https://toml.example.com");
    toml_config.logging.level = "warn".to_string();

    let config = resolve(&ConfigOverrides::default(), &toml_config).unwrap();
    assert_eq!(config.log_level, "warn");

    env::set_var(ENV_LOG_LEVEL, "debug");
    let config = resolve(&ConfigOverrides::default(), &toml_config).unwrap();
    assert_eq!(config.log_level, "debug");

    let overrides = ConfigOverrides {
        log_level: Some("jrnl_api=trace".to_string()),
        ..Default::default()
    };
    let config = resolve(&overrides, &toml_config).unwrap();
    assert_eq!(config.log_level, "jrnl_api=trace");

    clear_env();
}
