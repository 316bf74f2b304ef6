//! Published-release lookup.
//!
//! Release records come from `gh release list` with a JSON field selection;
//! the [ReleaseSource] trait abstracts that query so release and docs logic
//! can be driven by [MockReleases] in tests.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{ActionsKitError, Result};
use crate::git::Repository;
use crate::process;

const RELEASE_JSON_FIELDS: &str = "name,tagName,isLatest,publishedAt";

/// One published release as reported by the GitHub CLI.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    pub name: String,
    pub tag_name: String,
    pub is_latest: bool,
    /// Unset for drafts
    pub published_at: Option<DateTime<Utc>>,
}

/// Query for published releases, ordered most recent first.
pub trait ReleaseSource {
    /// Fetch up to `limit` releases.
    fn releases(&self, limit: usize) -> Result<Vec<Release>>;

    /// Tag name of the latest published release, if any.
    fn latest_tag(&self) -> Result<Option<String>> {
        let releases = self.releases(1)?;
        Ok(releases
            .first()
            .filter(|release| release.is_latest)
            .map(|release| release.tag_name.clone()))
    }
}

/// Release listing backed by the `gh` CLI.
pub struct GhReleases {
    /// Repository slug (OWNER/REPO) to query; defaults to the current repo
    repo: Option<String>,
}

impl GhReleases {
    pub fn new(repo: Option<String>) -> Self {
        GhReleases { repo }
    }
}

impl ReleaseSource for GhReleases {
    fn releases(&self, limit: usize) -> Result<Vec<Release>> {
        let limit_str = limit.to_string();
        let mut args = vec![
            "release",
            "list",
            "--limit",
            limit_str.as_str(),
            "--json",
            RELEASE_JSON_FIELDS,
        ];
        if let Some(repo) = &self.repo {
            args.push("--repo");
            args.push(repo.as_str());
        }

        let output = process::run("gh", &args)?;
        if !output.success() {
            return Err(ActionsKitError::command(format!(
                "gh release list failed: {}",
                output.combined().trim()
            )));
        }

        parse_releases(&output.stdout)
    }
}

/// Parse the JSON payload produced by `gh release list --json`.
pub fn parse_releases(json: &str) -> Result<Vec<Release>> {
    Ok(serde_json::from_str(json)?)
}

/// Get the commit hash of the latest published release.
///
/// # Returns
/// * `Ok(Some(hash))` - The latest release tag, peeled to its commit
/// * `Ok(None)` - No release published yet
///
/// # Errors
/// * [crate::error::ActionsKitError::Consistency] - The release tag exists on GitHub but
///   not in the local commit history
pub fn latest_release_hash(
    source: &impl ReleaseSource,
    repo: &impl Repository,
) -> Result<Option<String>> {
    let Some(tag_name) = source.latest_tag()? else {
        return Ok(None);
    };

    match repo.tag_commit_hash(&tag_name)? {
        Some(hash) => Ok(Some(hash)),
        None => Err(ActionsKitError::consistency(format!(
            "Tag {} not found in repository commit history",
            tag_name
        ))),
    }
}

/// Fixed release listing for tests.
pub struct MockReleases {
    releases: Vec<Release>,
}

impl MockReleases {
    /// Create a source that reports no releases
    pub fn empty() -> Self {
        MockReleases { releases: vec![] }
    }

    /// Create a source with a single latest release
    pub fn with_latest(tag_name: impl Into<String>) -> Self {
        let tag_name = tag_name.into();
        MockReleases {
            releases: vec![Release {
                name: tag_name.clone(),
                tag_name,
                is_latest: true,
                published_at: None,
            }],
        }
    }
}

impl ReleaseSource for MockReleases {
    fn releases(&self, limit: usize) -> Result<Vec<Release>> {
        Ok(self.releases.iter().take(limit).cloned().collect())
    }
}
