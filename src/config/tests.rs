//! Tests for the config module

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use super::loader::{load_or_default, suggest_key, with_env_overrides_from, CONFIG_FILE_NAME};
use super::types::*;
use crate::error::FwkitError;

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.project.env, "seeed_xiao_esp32s3");
    assert_eq!(config.project.platformio_ini, PathBuf::from("platformio.ini"));
    assert_eq!(config.embed.files.len(), 11);
    assert_eq!(config.embed.files[0], "index.html");
    assert_eq!(config.embed.timeout_secs, 30);
    assert_eq!(config.ota.prefix, "XIAOS3Sense");
    assert_eq!(config.ota.output_dir, PathBuf::from("dist/ota"));
    assert_eq!(config.ota.build_tool, "pio");
    assert_eq!(config.version.fallback_base, "0.0.0");
    assert_eq!(config.version.fallback_hash, "nogit");
    assert_eq!(config.audio.expected_sample_rate, 16_000);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[project]
env = "esp32cam"

[embed]
files = ["index.html", "app.js"]

[ota]
prefix = "Doorbell"

[version]
fallback_hash = "local"

[audio]
expected_sample_rate = 22050
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.project.env, "esp32cam");
    assert_eq!(config.embed.files, vec!["index.html", "app.js"]);
    assert_eq!(config.embed.data_dir, PathBuf::from("data"));
    assert_eq!(config.ota.prefix, "Doorbell");
    assert_eq!(config.ota.build_tool, "pio");
    assert_eq!(config.version.fallback_base, "0.0.0");
    assert_eq!(config.version.fallback_hash, "local");
    assert_eq!(config.audio.expected_sample_rate, 22050);
}

#[test]
fn test_unknown_keys_become_warnings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "[ota]\nprefx = \"X\"\n").unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();

    assert_eq!(config.ota.prefix, "XIAOS3Sense");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "prefx");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("prefix"));
}

#[test]
fn test_invalid_toml_is_invalid_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "[audio]\nexpected_sample_rate = \"fast\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, FwkitError::InvalidConfig { .. }));
}

#[test]
fn test_load_or_default_without_project_config() {
    let dir = tempdir().unwrap();
    let (config, warnings) = load_or_default(dir.path(), None).unwrap();

    assert!(warnings.is_empty());
    assert_eq!(config.embed.include_dir, PathBuf::from("include"));
}

#[test]
fn test_load_or_default_reads_project_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[embed]\ninclude_dir = \"src/generated\"\n",
    )
    .unwrap();

    let (config, _) = load_or_default(dir.path(), None).unwrap();
    assert_eq!(config.embed.include_dir, PathBuf::from("src/generated"));
}

#[test]
fn test_explicit_missing_config_is_error() {
    let dir = tempdir().unwrap();
    let err = load_or_default(dir.path(), Some(Path::new("/nonexistent/fwkit.toml"))).unwrap_err();
    assert!(matches!(err, FwkitError::FileNotFound { .. }));
}

#[test]
fn test_env_overrides() {
    let config = with_env_overrides_from(
        Config::default(),
        env_of(&[
            ("FWKIT_ENV", "esp32cam"),
            ("FWKIT_PREFIX", "Cam"),
            ("FWKIT_BUILD_TOOL", "/opt/pio/bin/pio"),
            ("FWKIT_OTA_DIR", "out"),
        ]),
    );

    assert_eq!(config.project.env, "esp32cam");
    assert_eq!(config.ota.prefix, "Cam");
    assert_eq!(config.ota.build_tool, "/opt/pio/bin/pio");
    assert_eq!(config.ota.output_dir, PathBuf::from("out"));
}

#[test]
fn test_blank_env_override_is_ignored() {
    let config = with_env_overrides_from(Config::default(), env_of(&[("FWKIT_ENV", "  ")]));
    assert_eq!(config.project.env, DEFAULT_ENV);
}

#[test]
fn test_suggest_key() {
    assert_eq!(suggest_key("fles").as_deref(), Some("files"));
    assert_eq!(suggest_key("buildtool").as_deref(), Some("build_tool"));
    assert_eq!(suggest_key("completely_unrelated"), None);
}
