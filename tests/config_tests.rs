use std::path::PathBuf;
use std::time::Duration;
use vault_probe::{ProbeConfig, ProbeError};

#[test]
fn test_defaults_without_config_file() {
    let config = ProbeConfig::load(None).expect("defaults always load");

    assert_eq!(config, ProbeConfig::default());
    assert_eq!(config.timeout(), None);
    assert!(config.http.user_agent.starts_with("vault-probe/"));
    assert!(config.http.system_proxy);
    assert_eq!(config.logging.api_log_path, None);
}

#[test]
fn test_load_full_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("probe.toml");
    std::fs::write(
        &path,
        r#"
[http]
timeout_seconds = 30
user_agent = "ops-probe/2"
system_proxy = false

[logging]
api_log_path = "api_debug.log"
"#,
    )
    .unwrap();

    let config = ProbeConfig::load(Some(&path)).expect("valid config should load");

    assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
    assert_eq!(config.http.user_agent, "ops-probe/2");
    assert!(!config.http.system_proxy);
    assert_eq!(config.logging.api_log_path, Some(PathBuf::from("api_debug.log")));
}

#[test]
fn test_partial_file_keeps_defaults() {
    let config = ProbeConfig::from_toml_str("[http]\ntimeout_seconds = 5\n").unwrap();

    assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    assert_eq!(config.http.user_agent, ProbeConfig::default().http.user_agent);
    assert_eq!(config.logging.api_log_path, None);
}

#[test]
fn test_empty_file_is_default() {
    assert_eq!(ProbeConfig::from_toml_str("").unwrap(), ProbeConfig::default());
}

#[test]
fn test_zero_timeout_rejected() {
    let err = ProbeConfig::from_toml_str("[http]\ntimeout_seconds = 0\n").unwrap_err();

    assert!(matches!(err, ProbeError::Config(_)));
    assert!(err.to_string().contains("timeout_seconds"));
}

#[test]
fn test_blank_user_agent_rejected() {
    let err = ProbeConfig::from_toml_str("[http]\nuser_agent = \"  \"\n").unwrap_err();
    assert!(err.to_string().contains("user_agent"));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let err = ProbeConfig::from_toml_str("[http\ntimeout_seconds = ").unwrap_err();
    assert!(matches!(err, ProbeError::ConfigParse(_)));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let err = ProbeConfig::from_toml_str("[http]\ntimeout_seconds = \"soon\"\n").unwrap_err();
    assert!(matches!(err, ProbeError::ConfigParse(_)));
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = ProbeConfig::load(Some(&path)).unwrap_err();

    match err {
        ProbeError::ConfigRead { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected read error, got {:?}", other),
    }
}

#[test]
fn test_config_round_trips_through_toml() {
    let mut config = ProbeConfig::default();
    config.http.timeout_seconds = Some(12);
    config.logging.api_log_path = Some(PathBuf::from("/tmp/vault-api.log"));

    let text = toml::to_string_pretty(&config).unwrap();

    assert_eq!(ProbeConfig::from_toml_str(&text).unwrap(), config);
}
