//! Documentation version management.
//!
//! Determines the version and alias the documentation website should be
//! deployed under, based on the latest published release and the current
//! commit, and renders action metadata as Markdown for the docs site.

use std::fs;
use std::path::Path;

use serde_yaml::Value;

use crate::error::{ActionsKitError, Result};
use crate::git::Repository;
use crate::releases::ReleaseSource;
use crate::ui;
use crate::version::get_major_minor_version;
use crate::warning::Warning;

/// Version/alias pair for a docs deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsVersion {
    /// Docs version label, e.g. "1.0" or "dev"
    pub version: String,
    /// Docs alias, e.g. "latest", or empty
    pub alias: String,
}

/// Determine the correct version and alias for the documentation website.
///
/// When HEAD is the latest release commit, the docs version is the release's
/// `major.minor` with alias `latest`. When HEAD is a descendant of the
/// latest release, or nothing has been released yet (a non-fatal warning),
/// the docs version is `dev` with no alias. A HEAD unrelated to the latest
/// release is a consistency error.
///
/// # Errors
/// * [crate::error::ActionsKitError::Consistency] - HEAD is not a descendant of the
///   latest release, or the release tag is missing from local history
/// * [crate::error::ActionsKitError::Format] - The release tag cannot be truncated to
///   `major.minor`
pub fn resolve_docs_version(
    repo: &impl Repository,
    releases: &impl ReleaseSource,
) -> Result<DocsVersion> {
    let release_tag = releases.latest_tag()?;
    if release_tag.is_none() {
        ui::display_warning(&Warning::NoLatestRelease);
    }

    let release_hash = match &release_tag {
        Some(tag) => match repo.tag_commit_hash(tag)? {
            Some(hash) => Some(hash),
            None => {
                return Err(ActionsKitError::consistency(format!(
                    "Tag {} not found in repository commit history",
                    tag
                )))
            }
        },
        None => None,
    };
    let current_hash = repo.head_hash()?;

    let dev = DocsVersion {
        version: "dev".to_string(),
        alias: String::new(),
    };

    let Some(release_hash) = release_hash else {
        return Ok(dev);
    };

    if release_hash == current_hash {
        let tag = release_tag.as_deref().unwrap_or_default();
        let strict = tag.trim_start_matches('v');
        let version = get_major_minor_version(strict, false).ok_or_else(|| {
            ActionsKitError::format(format!(
                "Cannot parse major.minor version from release tag {}",
                tag
            ))
        })?;
        Ok(DocsVersion {
            version,
            alias: "latest".to_string(),
        })
    } else if repo.is_ancestor(&release_hash, &current_hash)? {
        Ok(dev)
    } else {
        Err(ActionsKitError::consistency(format!(
            "The current commit hash {} is not a descendant of the latest release {} {}",
            short_hash(&current_hash),
            release_tag.as_deref().unwrap_or_default(),
            short_hash(&release_hash)
        )))
    }
}

fn short_hash(hash: &str) -> &str {
    if hash.len() > 7 {
        &hash[..7]
    } else {
        hash
    }
}

/// Parse an action metadata YAML file.
pub fn parse_action_yaml<P: AsRef<Path>>(filename: P) -> Result<Value> {
    let content = fs::read_to_string(filename)?;
    Ok(serde_yaml::from_str(&content)?)
}

/// One-line Markdown description of an action: bold code name plus summary.
pub fn action_markdown_desc(action: &Value) -> String {
    let name = yaml_str(action, "name");
    let description = yaml_str(action, "description");
    format!("**`{}`** - {}\n\n", name, description)
}

/// Markdown page header for an action.
pub fn action_markdown_header(action: &Value) -> String {
    let name = yaml_str(action, "name");
    let description = yaml_str(action, "description");
    format!("# {}\n\n{}\n\n", name, description)
}

/// Markdown documentation of an action's inputs and outputs.
pub fn action_markdown_io(action: &Value) -> String {
    let mut markdown: Vec<String> = Vec::new();

    if let Some(inputs) = action.get("inputs").and_then(Value::as_mapping) {
        markdown.push("## Inputs\n\n".to_string());
        for (name, details) in inputs {
            let name = name.as_str().unwrap_or_default();
            let description = yaml_str(details, "description");
            let required = if details
                .get("required")
                .and_then(Value::as_bool)
                .unwrap_or(false)
            {
                " **Required.**"
            } else {
                ""
            };
            let default = match details.get("default") {
                Some(Value::String(value)) if !value.is_empty() => {
                    format!(" Default: `{}`.", value)
                }
                Some(Value::Bool(value)) => format!(" Default: `{}`.", value),
                Some(Value::Number(value)) => format!(" Default: `{}`.", value),
                _ => String::new(),
            };
            markdown.push(format!(
                "  - `{}`: {}.{}{}",
                name, description, required, default
            ));
        }
    }

    if let Some(outputs) = action.get("outputs").and_then(Value::as_mapping) {
        markdown.push("\n## Outputs\n\n".to_string());
        for (name, details) in outputs {
            let name = name.as_str().unwrap_or_default();
            markdown.push(format!("  - `{}`: {}.", name, yaml_str(details, "description")));
        }
    }

    markdown.join("\n")
}

fn yaml_str<'a>(value: &'a Value, field: &str) -> &'a str {
    value
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockRepository;
    use crate::releases::MockReleases;

    #[test]
    fn test_docs_version_at_release() {
        let releases = MockReleases::with_latest("v1.0.0");
        let mut repo = MockRepository::new();
        repo.add_tag("v1.0.0", "abc123");
        repo.set_head("abc123");

        let docs = resolve_docs_version(&repo, &releases).unwrap();
        assert_eq!(docs.version, "1.0");
        assert_eq!(docs.alias, "latest");
    }

    #[test]
    fn test_docs_version_ahead_of_release() {
        let releases = MockReleases::with_latest("v1.0.0");
        let mut repo = MockRepository::new();
        repo.add_tag("v1.0.0", "abc123");
        repo.set_head("def456");
        repo.add_ancestry("abc123", "def456");

        let docs = resolve_docs_version(&repo, &releases).unwrap();
        assert_eq!(docs.version, "dev");
        assert_eq!(docs.alias, "");
    }

    #[test]
    fn test_docs_version_no_release_falls_back_to_dev() {
        let releases = MockReleases::empty();
        let mut repo = MockRepository::new();
        repo.set_head("abc123");

        let docs = resolve_docs_version(&repo, &releases).unwrap();
        assert_eq!(docs.version, "dev");
        assert_eq!(docs.alias, "");
    }

    #[test]
    fn test_docs_version_not_descendant_fails() {
        let releases = MockReleases::with_latest("v1.0.0");
        let mut repo = MockRepository::new();
        repo.add_tag("v1.0.0", "abc1234567890");
        repo.set_head("def4567890123");

        let result = resolve_docs_version(&repo, &releases);
        match result {
            Err(crate::error::ActionsKitError::Consistency(msg)) => {
                assert!(msg.contains("abc1234"));
                assert!(msg.contains("def4567"));
                assert!(msg.contains("v1.0.0"));
            }
            other => panic!("expected consistency error, got {:?}", other),
        }
    }

    #[test]
    fn test_docs_version_unparsable_tag_fails() {
        let releases = MockReleases::with_latest("nightly");
        let mut repo = MockRepository::new();
        repo.add_tag("nightly", "abc123");
        repo.set_head("abc123");

        let result = resolve_docs_version(&repo, &releases);
        assert!(matches!(
            result,
            Err(crate::error::ActionsKitError::Format(_))
        ));
    }

    const ACTION_YAML: &str = "\
name: docs
description: Build and deploy the documentation website
inputs:
  docs-version:
    description: The version of the docs being deployed
    required: true
  alias:
    description: Alias for the docs version
    default: latest
outputs:
  url:
    description: URL of the deployed site
";

    #[test]
    fn test_action_markdown_desc() {
        let action: Value = serde_yaml::from_str(ACTION_YAML).unwrap();
        assert_eq!(
            action_markdown_desc(&action),
            "**`docs`** - Build and deploy the documentation website\n\n"
        );
    }

    #[test]
    fn test_action_markdown_header() {
        let action: Value = serde_yaml::from_str(ACTION_YAML).unwrap();
        assert!(action_markdown_header(&action)
            .starts_with("# docs\n\nBuild and deploy the documentation website\n"));
    }

    #[test]
    fn test_action_markdown_io() {
        let action: Value = serde_yaml::from_str(ACTION_YAML).unwrap();
        let markdown = action_markdown_io(&action);

        assert!(markdown.contains("## Inputs\n"));
        assert!(markdown.contains("## Outputs\n"));
        assert!(markdown.contains("`docs-version`: The version of the docs being deployed. **Required.**"));
        assert!(markdown.contains("`alias`: Alias for the docs version. Default: `latest`."));
        assert!(markdown.contains("`url`: URL of the deployed site."));
    }

    #[test]
    fn test_action_markdown_io_empty_action() {
        let action: Value = serde_yaml::from_str("name: bare\n").unwrap();
        assert_eq!(action_markdown_io(&action), "");
    }
}
