use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ActionsKitError, Result};

/// Represents the complete configuration for actions-kit.
///
/// Contains the release file layout, changelog conventions, and the
/// workflow-template source repository.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub release: ReleaseConfig,

    #[serde(default)]
    pub templates: TemplatesConfig,
}

/// File locations read and written during a release.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PathsConfig {
    #[serde(default = "default_changelog")]
    pub changelog: String,

    #[serde(default = "default_version_file")]
    pub version_file: String,

    #[serde(default = "default_citation")]
    pub citation: String,

    #[serde(default = "default_release_notes")]
    pub release_notes: String,
}

fn default_changelog() -> String {
    "CHANGELOG.md".to_string()
}

fn default_version_file() -> String {
    "VERSION".to_string()
}

fn default_citation() -> String {
    "CITATION.cff".to_string()
}

fn default_release_notes() -> String {
    ".github/latest-release.md".to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            changelog: default_changelog(),
            version_file: default_version_file(),
            citation: default_citation(),
            release_notes: default_release_notes(),
        }
    }
}

/// Release drafting conventions.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    #[serde(default = "default_draft_branch")]
    pub draft_branch: String,

    /// Changelog heading token that marks the unreleased section
    #[serde(default = "default_dev_header")]
    pub dev_header: String,
}

fn default_draft_branch() -> String {
    "release-draft".to_string()
}

fn default_dev_header() -> String {
    "development version".to_string()
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            draft_branch: default_draft_branch(),
            dev_header: default_dev_header(),
        }
    }
}

/// Source of downloadable workflow templates.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct TemplatesConfig {
    /// Repository slug (OWNER/REPO) hosting example workflow files
    #[serde(default)]
    pub repo: Option<String>,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `actionskit.toml` in current directory
/// 3. `actionskit.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./actionskit.toml").exists() {
        fs::read_to_string("./actionskit.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("actionskit.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| ActionsKitError::config(format!("Invalid configuration: {}", e)))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = Config::default();
        assert_eq!(config.paths.changelog, "CHANGELOG.md");
        assert_eq!(config.paths.version_file, "VERSION");
        assert_eq!(config.paths.citation, "CITATION.cff");
        assert_eq!(config.paths.release_notes, ".github/latest-release.md");
    }

    #[test]
    fn test_default_release_settings() {
        let config = Config::default();
        assert_eq!(config.release.draft_branch, "release-draft");
        assert_eq!(config.release.dev_header, "development version");
        assert_eq!(config.templates.repo, None);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
[templates]
repo = "example-org/actions"
"#,
        )
        .unwrap();
        assert_eq!(config.templates.repo.as_deref(), Some("example-org/actions"));
        assert_eq!(config.paths.changelog, "CHANGELOG.md");
    }
}
