use std::collections::{HashMap, HashSet};

use crate::error::{ActionsKitError, Result};
use crate::git::Repository;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    head: Option<String>,
    tags: HashMap<String, String>,
    ancestry: HashSet<(String, String)>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            head: None,
            tags: HashMap::new(),
            ancestry: HashSet::new(),
        }
    }

    /// Set the current HEAD hash
    pub fn set_head(&mut self, hash: impl Into<String>) {
        self.head = Some(hash.into());
    }

    /// Add a tag pointing at a commit hash
    pub fn add_tag(&mut self, name: impl Into<String>, hash: impl Into<String>) {
        self.tags.insert(name.into(), hash.into());
    }

    /// Record that `ancestor` is an ancestor of `descendant`
    pub fn add_ancestry(&mut self, ancestor: impl Into<String>, descendant: impl Into<String>) {
        self.ancestry.insert((ancestor.into(), descendant.into()));
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn head_hash(&self) -> Result<String> {
        self.head
            .clone()
            .ok_or_else(|| ActionsKitError::consistency("Mock repository has no HEAD"))
    }

    fn tag_commit_hash(&self, tag_name: &str) -> Result<Option<String>> {
        Ok(self.tags.get(tag_name).cloned())
    }

    fn is_ancestor(&self, ancestor: &str, descendant: &str) -> Result<bool> {
        if ancestor == descendant {
            return Ok(true);
        }
        Ok(self
            .ancestry
            .contains(&(ancestor.to_string(), descendant.to_string())))
    }
}
