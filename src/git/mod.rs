//! Git repository queries behind a trait.
//!
//! Everything actions-kit needs from git is read-only: the current HEAD hash,
//! the commit a tag points at, and the ancestry relation between two commits.
//! The [Repository] trait abstracts those queries so the docs-version and
//! release logic can be exercised against [mock::MockRepository] in tests,
//! with [repository::Git2Repository] as the real implementation.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Read-only git repository queries.
///
/// Implementors must be `Send + Sync`. Commit hashes are full 40-character
/// hex strings throughout.
pub trait Repository: Send + Sync {
    /// Get the commit hash of the current HEAD.
    fn head_hash(&self) -> Result<String>;

    /// Get the commit hash a tag points at.
    ///
    /// Handles both lightweight and annotated tags by peeling to the
    /// underlying commit.
    ///
    /// # Returns
    /// * `Ok(Some(hash))` - The tag exists
    /// * `Ok(None)` - No such tag in the repository
    fn tag_commit_hash(&self, tag_name: &str) -> Result<Option<String>>;

    /// Check whether `ancestor` is an ancestor of `descendant` in the commit
    /// graph. A commit counts as its own ancestor, mirroring
    /// `git merge-base --is-ancestor`.
    fn is_ancestor(&self, ancestor: &str, descendant: &str) -> Result<bool>;
}
