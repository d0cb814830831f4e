use std::io::Write;

use nodeflow::ApiConfig;

#[test]
fn test_load_full_config_from_file() {
    let toml_content = r#"
base_url = "https://workflows.example.com"
token = "test-bearer-token"
timeout_secs = 10
"#;

    let mut tmp = tempfile::NamedTempFile::new().expect("create temp file");
    tmp.write_all(toml_content.as_bytes()).expect("write toml");

    let config = ApiConfig::load(tmp.path()).expect("load config");

    assert_eq!(config.base_url, "https://workflows.example.com");
    assert_eq!(config.token.as_deref(), Some("test-bearer-token"));
    assert_eq!(config.timeout_secs, 10);
}

#[test]
fn test_load_empty_config_uses_defaults() {
    let mut tmp = tempfile::NamedTempFile::new().expect("create temp file");
    tmp.write_all(b"").expect("write toml");

    let config = ApiConfig::load(tmp.path()).expect("load config");

    assert_eq!(config.base_url, "http://localhost:8000");
    assert!(config.token.is_none());
    assert_eq!(config.timeout_secs, 30);
}
