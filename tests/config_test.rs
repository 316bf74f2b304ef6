// tests/config_test.rs
use std::io::Write;

use actions_kit::config::{load_config, Config};
use tempfile::NamedTempFile;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.paths.changelog, "CHANGELOG.md");
    assert_eq!(config.paths.version_file, "VERSION");
    assert_eq!(config.paths.citation, "CITATION.cff");
    assert_eq!(config.release.draft_branch, "release-draft");
    assert_eq!(config.release.dev_header, "development version");
    assert_eq!(config.templates.repo, None);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[paths]
changelog = "docs/CHANGELOG.md"

[release]
draft_branch = "next-release"

[templates]
repo = "example-org/actions"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.paths.changelog, "docs/CHANGELOG.md");
    assert_eq!(config.release.draft_branch, "next-release");
    assert_eq!(config.templates.repo.as_deref(), Some("example-org/actions"));
    // omitted sections keep their defaults
    assert_eq!(config.paths.version_file, "VERSION");
    assert_eq!(config.release.dev_header, "development version");
}

#[test]
fn test_load_missing_explicit_file_fails() {
    let result = load_config(Some("/nonexistent/actionskit.toml"));
    assert!(result.is_err());
}

#[test]
fn test_load_invalid_toml_fails() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"not [valid toml").unwrap();
    temp_file.flush().unwrap();

    let result = load_config(Some(temp_file.path().to_str().unwrap()));
    assert!(result.is_err());
}
