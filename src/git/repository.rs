use std::path::Path;

use git2::{Oid, Repository};

use super::TagSource;
use crate::error::{CiVersionError, Result};

/// Wrapper around a git2 [Repository] providing the tag listings needed for
/// version derivation.
///
/// All operations are read-only; the repository is never mutated.
pub struct GitRepo {
    repo: Repository,
}

impl std::fmt::Debug for GitRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitRepo")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl GitRepo {
    /// Opens the repository at the given location.
    ///
    /// Discovers the git repository in the given directory or its parents.
    ///
    /// # Returns
    /// * `Ok(GitRepo)` - Successfully opened repository
    /// * `Err(RepositoryAccess)` - If the location is not inside a git repository
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path).map_err(|e| {
            CiVersionError::repository(format!(
                "'{}' is not a git repository: {}",
                path.display(),
                e
            ))
        })?;
        Ok(GitRepo { repo })
    }

    /// Resolves the commit OID of HEAD.
    fn head_oid(&self) -> Result<Oid> {
        let head = self.repo.head()?.peel_to_commit()?;
        Ok(head.id())
    }

    /// Resolves a tag name to the commit it points at.
    ///
    /// Handles both lightweight and annotated tags by peeling the tag
    /// reference down to a commit. Returns `None` for refs that do not
    /// resolve to a commit.
    fn tag_commit_oid(&self, tag_name: &str) -> Option<Oid> {
        let reference = self
            .repo
            .find_reference(&format!("refs/tags/{}", tag_name))
            .ok()?;
        let commit = reference.peel_to_commit().ok()?;
        Some(commit.id())
    }
}

impl TagSource for GitRepo {
    /// Equivalent of `git tag --contains HEAD`: tags whose commit is HEAD
    /// itself or a descendant of HEAD.
    fn tags_at_head(&self) -> Result<Vec<String>> {
        let head = self.head_oid()?;

        let mut tags = Vec::new();
        for tag_name in self.repo.tag_names(None)?.iter().flatten() {
            let Some(tag_oid) = self.tag_commit_oid(tag_name) else {
                continue;
            };
            if tag_oid == head || self.repo.graph_descendant_of(tag_oid, head)? {
                tags.push(tag_name.to_string());
            }
        }

        tags.sort();
        Ok(tags)
    }

    fn all_tags(&self) -> Result<Vec<String>> {
        let mut tags: Vec<String> = self
            .repo
            .tag_names(None)?
            .iter()
            .flatten()
            .map(|name| name.to_string())
            .collect();

        tags.sort();
        Ok(tags)
    }
}
