use std::path::Path;

use git2::{Oid, Repository as Git2Repo};

use crate::error::{ActionsKitError, Result};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::Repository for Git2Repository {
    fn head_hash(&self) -> Result<String> {
        let head = self.repo.head()?;
        let oid = head.target().ok_or_else(|| {
            ActionsKitError::consistency("HEAD is detached or invalid".to_string())
        })?;
        Ok(oid.to_string())
    }

    fn tag_commit_hash(&self, tag_name: &str) -> Result<Option<String>> {
        let reference_name = format!("refs/tags/{}", tag_name);

        match self.repo.find_reference(&reference_name) {
            Ok(reference) => {
                let oid = reference.peel_to_commit()?.id();
                Ok(Some(oid.to_string()))
            }
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn is_ancestor(&self, ancestor: &str, descendant: &str) -> Result<bool> {
        let ancestor_oid = Oid::from_str(ancestor)?;
        let descendant_oid = Oid::from_str(descendant)?;

        if ancestor_oid == descendant_oid {
            return Ok(true);
        }

        Ok(self.repo.graph_descendant_of(descendant_oid, ancestor_oid)?)
    }
}

// SAFETY: Git2Repository wraps git2::Repository which is Send.
// All trait methods are read-only queries backed by libgit2's thread-safe
// object database access.
unsafe impl Sync for Git2Repository {}
