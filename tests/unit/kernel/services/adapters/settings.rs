use super::*;
use tempfile::tempdir;

#[test]
fn ensure_config_file_writes_defaults_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    ensure_config_file_at(&path).unwrap();
    let config = load_config(&path).unwrap();
    assert_eq!(config, NavigatorConfig::default());

    std::fs::write(&path, r#"{"sourceTag": "custom"}"#).unwrap();
    ensure_config_file_at(&path).unwrap();
    assert_eq!(load_config(&path).unwrap().source_tag, "custom");
}

#[test]
fn load_config_reports_parse_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn load_config_reports_missing_file() {
    let dir = tempdir().unwrap();
    let err = load_config(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn load_config_or_default_falls_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "[]").unwrap();

    assert_eq!(
        load_config_or_default(Some(&path)),
        NavigatorConfig::default()
    );
}
