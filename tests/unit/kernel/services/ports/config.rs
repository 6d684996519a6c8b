use super::*;

#[test]
fn test_default_config() {
    let config = NavigatorConfig::default();
    assert_eq!(config.source_tag, "hierarchy");
    assert!(!config.include_graphs);
    assert_eq!(config.labels.max_chars, 14);
    assert_eq!(config.labels.keep_chars, 12);
    assert_eq!(config.labels.ellipsis, "...");
    assert_eq!(config.request_timeout().as_millis(), 30_000);
}

#[test]
fn test_camel_case_aliases() {
    let data = r#"{
      "serverUrl": "http://regraph.local:8080",
      "sourceTag": "side-panel",
      "includeGraphs": true,
      "requestTimeoutMs": 500,
      "exportFileName": "nuggets.ka",
      "labels": { "maxChars": 20, "keepChars": 18, "ellipsis": "~" }
    }"#;

    let config: NavigatorConfig = serde_json::from_str(data).expect("parse config");
    assert_eq!(config.server_url, "http://regraph.local:8080");
    assert_eq!(config.source_tag, "side-panel");
    assert!(config.include_graphs);
    assert_eq!(config.request_timeout_ms, 500);
    assert_eq!(config.export_file_name, "nuggets.ka");
    assert_eq!(config.labels.max_chars, 20);
    assert_eq!(config.labels.keep_chars, 18);
    assert_eq!(config.labels.ellipsis, "~");
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let config: NavigatorConfig =
        serde_json::from_str(r#"{"server_url": "http://x"}"#).expect("parse config");
    assert_eq!(config.server_url, "http://x");
    assert_eq!(config.source_tag, DEFAULT_SOURCE_TAG);
    assert_eq!(config.labels, LabelConfig::default());
}
