//! Semantic version matching and release-increment validation.
//!
//! The grammar follows the Semantic Versioning 2.0.0 specification
//! (<https://semver.org/>): numeric identifiers without leading zeros,
//! dot-separated alphanumeric-or-hyphen prerelease and build identifiers.
//! Matching is anchored at the start of the string only; trailing characters
//! after a valid version are tolerated.

use regex::Regex;

use crate::error::{ActionsKitError, Result};

/// Grammar for one semantic version, unanchored.
const SEMVER_GRAMMAR: &str = r"(?P<major>0|[1-9]\d*)\.(?P<minor>0|[1-9]\d*)\.(?P<patch>0|[1-9]\d*)(?:-(?P<prerelease>(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+(?P<buildmetadata>[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?";

/// A parsed semantic version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemVer {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Option<String>,
    pub build: Option<String>,
}

impl SemVer {
    /// Numeric components in decreasing order of significance.
    pub fn fields(&self) -> [u64; 3] {
        [self.major, self.minor, self.patch]
    }
}

impl std::fmt::Display for SemVer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.prerelease {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

/// Match a version string against the semantic versioning grammar.
///
/// When `with_leading_v` is set, the literal prefix `v` is required;
/// otherwise the string must start directly with the major number.
///
/// # Arguments
/// * `version_str` - Version string to match (e.g., "1.2.3" or "v1.2.3-rc.1")
/// * `with_leading_v` - Whether a leading 'v' is required
///
/// # Returns
/// * `Some(SemVer)` - The parsed version
/// * `None` - If the string does not start with a valid version
///
/// # Example
/// ```
/// use actions_kit::version::match_semver;
///
/// assert!(match_semver("1.0.0-alpha+001", false).is_some());
/// assert!(match_semver("v2.5.12", true).is_some());
/// assert!(match_semver("invalid_version", false).is_none());
/// ```
pub fn match_semver(version_str: &str, with_leading_v: bool) -> Option<SemVer> {
    let prefix = if with_leading_v { "v" } else { "" };
    let Ok(re) = Regex::new(&format!("^{}{}", prefix, SEMVER_GRAMMAR)) else {
        return None;
    };
    let captures = re.captures(version_str)?;

    let major = captures.name("major")?.as_str().parse::<u64>().ok()?;
    let minor = captures.name("minor")?.as_str().parse::<u64>().ok()?;
    let patch = captures.name("patch")?.as_str().parse::<u64>().ok()?;

    Some(SemVer {
        major,
        minor,
        patch,
        prerelease: captures.name("prerelease").map(|m| m.as_str().to_string()),
        build: captures.name("buildmetadata").map(|m| m.as_str().to_string()),
    })
}

/// Extract the major and minor version from a semantic versioning string.
///
/// The result carries the leading 'v' when `with_leading_v` is set.
///
/// # Returns
/// * `Some("major.minor")` - For a valid version string
/// * `None` - If the string does not match the grammar
///
/// # Example
/// ```
/// use actions_kit::version::get_major_minor_version;
///
/// assert_eq!(get_major_minor_version("2.1.3-alpha", false), Some("2.1".to_string()));
/// assert_eq!(get_major_minor_version("invalid_version", false), None);
/// ```
pub fn get_major_minor_version(version_str: &str, with_leading_v: bool) -> Option<String> {
    let semver = match_semver(version_str, with_leading_v)?;
    let prefix = if with_leading_v { "v" } else { "" };
    Some(format!("{}{}.{}", prefix, semver.major, semver.minor))
}

/// Options for [check_version_increments_by_one].
#[derive(Debug, Clone, Copy)]
pub struct IncrementCheck {
    /// Require the leading 'v' on both version strings
    pub with_leading_v: bool,
    /// Fail with a validation error on an invalid increment instead of
    /// returning `Ok(false)`
    pub error_on_false: bool,
    /// Print per-field comparison results to stderr
    pub debug: bool,
}

impl Default for IncrementCheck {
    fn default() -> Self {
        IncrementCheck {
            with_leading_v: false,
            error_on_false: true,
            debug: false,
        }
    }
}

/// Check that `next_version` is exactly one semantic increment ahead of
/// `current_version`.
///
/// A valid increment bumps exactly one of major/minor/patch by one; any field
/// below the bumped one must be reset to zero, and any field above it must be
/// unchanged. Fields are compared as integers, so "1.9.10" is a valid patch
/// successor of "1.9.9".
///
/// # Errors
/// * [crate::error::ActionsKitError::Format] - `next_version` (or `current_version`)
///   does not match the semantic versioning grammar
/// * [crate::error::ActionsKitError::Validation] - the increment rule is violated and
///   `error_on_false` is set
pub fn check_version_increments_by_one(
    current_version: &str,
    next_version: &str,
    opts: IncrementCheck,
) -> Result<bool> {
    let mut is_valid = true;
    let error_msg = format!(
        "Next version must only increment one number at a time. Current version: {}. Proposed next version: {}.",
        current_version, next_version
    );

    let Some(next_semver) = match_semver(next_version, opts.with_leading_v) else {
        return Err(semver_guideline_error(next_version, opts.with_leading_v));
    };
    let Some(current_semver) = match_semver(current_version, opts.with_leading_v) else {
        return Err(semver_guideline_error(current_version, opts.with_leading_v));
    };

    let next_fields = next_semver.fields();
    let current_fields = current_semver.fields();

    let incremented: Vec<bool> = (0..3)
        .map(|i| next_fields[i] == current_fields[i] + 1)
        .collect();
    let equal: Vec<bool> = (0..3).map(|i| next_fields[i] == current_fields[i]).collect();
    let num_incremented = incremented.iter().filter(|&&b| b).count();

    if opts.debug {
        for (i, name) in ["major", "minor", "patch"].iter().enumerate() {
            eprintln!(
                "{}: incremented={} equal={}",
                name, incremented[i], equal[i]
            );
        }
    }

    // Walk fields from most to least significant. A field that neither
    // increments nor stays equal is only acceptable as a zero reset below a
    // higher-order bump.
    let mut higher_field_incremented = false;
    for i in 0..3 {
        let acceptable =
            incremented[i] || equal[i] || (next_fields[i] == 0 && higher_field_incremented);
        if !acceptable {
            is_valid = false;
            if opts.error_on_false {
                return Err(ActionsKitError::validation(error_msg));
            }
        }
        if incremented[i] {
            higher_field_incremented = true;
        }
    }

    if num_incremented != 1 {
        is_valid = false;
        if opts.error_on_false {
            return Err(ActionsKitError::validation(error_msg));
        }
    }

    Ok(is_valid)
}

fn semver_guideline_error(version_str: &str, with_leading_v: bool) -> ActionsKitError {
    let extra_msg = if with_leading_v && !version_str.starts_with('v') {
        " The tag does not start with 'v'."
    } else {
        ""
    };
    ActionsKitError::format(format!(
        "Tag {} does not match semantic versioning guidelines.{}\nView the guidelines here: https://semver.org/",
        version_str, extra_msg
    ))
}
