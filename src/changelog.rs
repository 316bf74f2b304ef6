//! Changelog rewriting for release drafts.
//!
//! A changelog tracks unreleased work under a heading containing a
//! recognized development-version token (e.g. "## toolkit development
//! version"). Drafting a release retitles that section with the next version
//! number and extracts it as the release notes.

use crate::error::{ActionsKitError, Result};
use crate::version::match_semver;

/// Result of preparing a changelog for a release.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangelogSplit {
    /// Full changelog with the development header replaced by the next version
    pub changelog: String,
    /// The lines belonging to the next release, for the release notes file
    pub release_notes: String,
}

/// Split a changelog into the updated full text and the next release's notes.
///
/// The development header token is replaced with `next_version_strict` on the
/// heading line that carries it. Every line up to the `latest_version_strict`
/// section heading belongs to the next release.
///
/// Both version arguments are bare versions without a leading 'v'.
///
/// # Errors
/// * [crate::error::ActionsKitError::Format] - Either version does not match the
///   semantic versioning grammar
pub fn split_changelog(
    content: &str,
    latest_version_strict: &str,
    next_version_strict: &str,
    dev_header: &str,
) -> Result<ChangelogSplit> {
    for version in [latest_version_strict, next_version_strict] {
        if match_semver(version, false).is_none() {
            return Err(ActionsKitError::format(format!(
                "Version {} does not match semantic versioning pattern",
                version
            )));
        }
    }

    let mut changelog = String::new();
    let mut release_notes = String::new();
    let mut for_next = true;

    for raw_line in content.split_inclusive('\n') {
        let line = if raw_line.starts_with('#') && raw_line.contains(dev_header) {
            raw_line.replace(dev_header, next_version_strict)
        } else {
            if raw_line.contains(latest_version_strict) {
                for_next = false;
            }
            raw_line.to_string()
        };

        changelog.push_str(&line);
        if for_next && !line.contains(next_version_strict) {
            release_notes.push_str(&line);
        }
    }

    Ok(ChangelogSplit {
        changelog,
        release_notes,
    })
}
