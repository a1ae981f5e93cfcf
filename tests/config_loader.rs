use freshcart::config::{Config, ConfigError};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn defaults_are_sane() {
    let config = Config::default();
    assert!(config.backend.base_url.starts_with("https://"));
    assert_eq!(config.backend.probe_collection, "products");
    assert_eq!(config.backend.timeout_seconds, 10);
    assert!(config.appearance.theme.is_none());
    config.validate().expect("defaults validate");
}

#[test]
fn full_file_parses() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(
        &dir,
        r#"
[backend]
base_url = "https://grocery.example.com"
api_key = "anon-key"
probe_collection = "orders"
timeout_seconds = 5

[appearance]
theme = "light"
"#,
    );

    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.backend.base_url, "https://grocery.example.com");
    assert_eq!(config.backend.api_key, "anon-key");
    assert_eq!(config.backend.probe_collection, "orders");
    assert_eq!(config.backend.timeout_seconds, 5);
    assert_eq!(config.appearance.theme.as_deref(), Some("light"));
}

#[test]
fn partial_file_gets_defaults() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(
        &dir,
        r#"
[backend]
api_key = "anon-key"
"#,
    );

    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.backend.probe_collection, "products");
    assert!(config.backend.base_url.starts_with("https://"));
}

#[test]
fn rejects_non_http_base_url() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(
        &dir,
        r#"
[backend]
base_url = "ftp://grocery.example.com"
"#,
    );

    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("base_url"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn rejects_empty_probe_collection() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(
        &dir,
        r#"
[backend]
probe_collection = ""
"#,
    );

    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("probe_collection"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn rejects_unknown_theme() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(
        &dir,
        r#"
[appearance]
theme = "sepia"
"#,
    );

    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, "backend = not-a-table");

    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn missing_explicit_file_is_a_read_error() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("absent.toml");

    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ReadError { .. })
    ));
}
