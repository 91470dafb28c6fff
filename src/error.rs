use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for ci-version operations
#[derive(Error, Debug)]
pub enum CiVersionError {
    #[error("Repository access failed: {0}")]
    RepositoryAccess(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("File {manifest} does not exist at {}", .path.display())]
    ManifestNotFound { manifest: String, path: PathBuf },

    #[error("Manifest parsing error: {0}")]
    ManifestParse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in ci-version
pub type Result<T> = std::result::Result<T, CiVersionError>;

impl CiVersionError {
    /// Create a repository access error with context
    pub fn repository(msg: impl Into<String>) -> Self {
        CiVersionError::RepositoryAccess(msg.into())
    }

    /// Create a manifest parsing error with context
    pub fn manifest_parse(msg: impl Into<String>) -> Self {
        CiVersionError::ManifestParse(msg.into())
    }

    /// Create a manifest-not-found error for the given file and resolved path
    pub fn manifest_not_found(manifest: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        CiVersionError::ManifestNotFound {
            manifest: manifest.into(),
            path: path.into(),
        }
    }
}
