//! Tag collection: turns raw tag names into the two semantic-version sets
//! the resolver works on.

use semver::Version;

use crate::error::Result;
use crate::git::TagSource;

/// The two version sets derived from a repository's tags.
///
/// Rebuilt from live repository state on every invocation; value equality
/// only, no persistence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VersionSets {
    /// Versions tagged on the current commit (or a commit containing it)
    pub current: Vec<Version>,
    /// Versions tagged anywhere in the repository
    pub all: Vec<Version>,
}

/// Collects the current-commit and whole-repository version sets.
///
/// When `prefix` is non-empty, only tags literally starting with it are
/// considered, and the prefix is stripped before parsing. Tags that do not
/// parse as semantic versions are silently dropped; repositories commonly
/// carry non-release tags.
///
/// # Returns
/// * `Ok(VersionSets)` - The two parsed version sets
/// * `Err` - If either tag listing fails
pub fn collect_versions<S: TagSource + ?Sized>(source: &S, prefix: &str) -> Result<VersionSets> {
    let current = parse_tags(&source.tags_at_head()?, prefix);
    let all = parse_tags(&source.all_tags()?, prefix);
    Ok(VersionSets { current, all })
}

/// Parses tag names into versions, applying the literal prefix filter.
///
/// `strip_prefix` with an empty prefix matches every tag, so the unprefixed
/// case needs no special handling.
fn parse_tags(tags: &[String], prefix: &str) -> Vec<Version> {
    tags.iter()
        .filter_map(|tag| tag.trim().strip_prefix(prefix))
        .filter_map(|stripped| Version::parse(stripped).ok())
        .collect()
}
