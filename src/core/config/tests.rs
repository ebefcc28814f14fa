use super::data::{path_display, Config};
use super::io::{ConfigError, CONFIG_FILE_NAME};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, contents).expect("Failed to write config");
    path
}

#[test]
fn test_load_nonexistent_config_is_an_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nonexistent_config.json");

    match Config::load_from_path(&config_path) {
        Err(ConfigError::NotFound { searched }) => assert_eq!(searched, vec![config_path]),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = write_config(&temp_dir, "{}");

    let config = Config::load_from_path(&config_path).expect("Failed to load config");

    assert_eq!(config.server_host(), "127.0.0.1");
    assert_eq!(config.server_port(), 5000);
    assert_eq!(config.connect_timeout(), Duration::from_secs(5));
    assert_eq!(config.read_timeout(), Some(Duration::from_secs(30)));
    assert_eq!(config.receive_buffer_bytes(), 1024);
    assert_eq!(config.max_frame_bytes(), 65536);
    assert!(config.expect_welcome());
    assert_eq!(config.empty_notifications_text(), "No new notifications.");
}

#[test]
fn test_explicit_values_are_used() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = write_config(
        &temp_dir,
        r#"{
            "server_host": "chat.example.org",
            "server_port": 6000,
            "read_timeout_secs": 0,
            "expect_welcome": false,
            "empty_notifications_text": "Inbox zero."
        }"#,
    );

    let config = Config::load_from_path(&config_path).expect("Failed to load config");

    assert_eq!(config.endpoint().to_string(), "chat.example.org:6000");
    assert_eq!(config.read_timeout(), None);
    assert!(!config.expect_welcome());
    assert_eq!(config.empty_notifications_text(), "Inbox zero.");
    assert_eq!(config.connection_options().read_timeout, None);
}

#[test]
fn test_invalid_json_reports_parse_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = write_config(&temp_dir, r#"{ "server_port": "five" }"#);

    let err = Config::load_from_path(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().starts_with("Failed to parse config at"));
}

#[test]
fn test_out_of_range_values_are_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let config_path = write_config(&temp_dir, r#"{ "server_port": 0 }"#);
    assert!(matches!(
        Config::load_from_path(&config_path),
        Err(ConfigError::Invalid {
            field: "server_port",
            ..
        })
    ));

    let config_path = write_config(&temp_dir, r#"{ "server_port": 70000 }"#);
    assert!(matches!(
        Config::load_from_path(&config_path),
        Err(ConfigError::Parse { .. })
    ));

    let config_path = write_config(&temp_dir, r#"{ "receive_buffer_bytes": 0 }"#);
    assert!(matches!(
        Config::load_from_path(&config_path),
        Err(ConfigError::Invalid {
            field: "receive_buffer_bytes",
            ..
        })
    ));

    let config_path = write_config(&temp_dir, r#"{ "max_frame_bytes": 0 }"#);
    assert!(matches!(
        Config::load_from_path(&config_path),
        Err(ConfigError::Invalid {
            field: "max_frame_bytes",
            ..
        })
    ));
}

#[test]
fn test_resolve_path_prefers_explicit_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = write_config(&temp_dir, "{}");

    let resolved = Config::resolve_path(Some(&config_path)).expect("should resolve");
    assert_eq!(resolved, config_path);

    let missing = temp_dir.path().join("other.json");
    assert!(matches!(
        Config::resolve_path(Some(&missing)),
        Err(ConfigError::NotFound { .. })
    ));
}

#[test]
fn test_load_returns_source_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = write_config(&temp_dir, r#"{ "server_port": 7000 }"#);

    let (config, source) = Config::load(Some(&config_path)).expect("should load");
    assert_eq!(config.server_port(), 7000);
    assert_eq!(source, config_path);
}

#[test]
fn test_search_paths_start_with_working_directory() {
    let paths = Config::search_paths();
    assert_eq!(paths[0], PathBuf::from(CONFIG_FILE_NAME));
}

#[test]
fn test_describe_lists_resolved_values() {
    let config = Config {
        server_port: Some(6001),
        read_timeout_secs: Some(0),
        ..Default::default()
    };
    let lines = config.describe(&PathBuf::from("config.json"));

    assert_eq!(lines[0], "Current configuration (config.json):");
    assert!(lines.contains(&"  server: 127.0.0.1:6001".to_string()));
    assert!(lines.contains(&"  read-timeout: off".to_string()));
    assert!(lines.contains(&"  max-frame: 65536 bytes".to_string()));
}

#[cfg(unix)]
#[test]
fn test_path_display_uses_tilde_for_home() {
    if let Some(home) = std::env::var_os("HOME") {
        let path = PathBuf::from(home).join(".config/chatline/config.json");
        assert_eq!(path_display(&path), "~/.config/chatline/config.json");
    }
}
