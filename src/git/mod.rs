//! Tag-listing abstraction layer
//!
//! This module provides a trait-based abstraction over the two tag listings
//! the version derivation needs, allowing for multiple implementations
//! including real git repositories and mock implementations for testing.
//!
//! The primary abstraction is the [TagSource] trait. The concrete
//! implementations include:
//!
//! - [repository::GitRepo]: a real implementation using the `git2` crate
//! - [mock::MockTagSource]: an in-memory implementation for testing
//!
//! Most code should depend on the [TagSource] trait rather than concrete
//! implementations so the collector and resolver can be tested without a
//! real repository.

pub mod mock;
pub mod repository;

pub use mock::MockTagSource;
pub use repository::GitRepo;

use crate::error::Result;

/// Source of raw tag names for version derivation.
///
/// Both methods return tag names as stored in the repository; semantic
/// version parsing and prefix handling happen in the collector.
pub trait TagSource {
    /// Tag names reachable from the current commit (tags pointing at HEAD
    /// or at a commit that contains HEAD)
    fn tags_at_head(&self) -> Result<Vec<String>>;

    /// Every tag name in the repository
    fn all_tags(&self) -> Result<Vec<String>>;
}
