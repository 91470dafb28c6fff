//! Manifest reading: extracts the compatibility baseline from a
//! `package.json` or `composer.json` file.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use semver::{BuildMetadata, Version};
use serde::Deserialize;

use crate::error::{CiVersionError, Result};

/// Manifest files a compatibility baseline can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    PackageJson,
    ComposerJson,
}

impl ManifestKind {
    /// The on-disk file name for this manifest kind.
    pub fn file_name(&self) -> &'static str {
        match self {
            ManifestKind::PackageJson => "package.json",
            ManifestKind::ComposerJson => "composer.json",
        }
    }
}

impl fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

impl FromStr for ManifestKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "package.json" => Ok(ManifestKind::PackageJson),
            "composer.json" => Ok(ManifestKind::ComposerJson),
            other => Err(format!(
                "unsupported manifest '{}' (allowed: package.json, composer.json)",
                other
            )),
        }
    }
}

/// The one field this tool reads from a manifest. Both supported manifest
/// formats declare the version at the top level.
#[derive(Debug, Deserialize)]
struct Manifest {
    version: Option<String>,
}

/// Reads the compatibility baseline from `<repository>/<path>/<file>`.
///
/// # Returns
/// * `Ok(Version)` - The normalized baseline version
/// * `Err(ManifestNotFound)` - The manifest does not exist at the resolved path
/// * `Err(ManifestParse)` - The file is not valid JSON or lacks a usable version field
pub fn read_baseline(repository: &Path, path: &Path, kind: ManifestKind) -> Result<Version> {
    let file_path = repository.join(path).join(kind.file_name());
    if !file_path.exists() {
        return Err(CiVersionError::manifest_not_found(
            kind.file_name(),
            file_path,
        ));
    }

    let contents = fs::read_to_string(&file_path)?;
    let manifest: Manifest = serde_json::from_str(&contents).map_err(|e| {
        CiVersionError::manifest_parse(format!("{}: {}", file_path.display(), e))
    })?;

    let raw = manifest.version.ok_or_else(|| {
        CiVersionError::manifest_parse(format!(
            "{}: missing version field",
            file_path.display()
        ))
    })?;

    clean_version(&raw).ok_or_else(|| {
        CiVersionError::manifest_parse(format!(
            "{}: '{}' is not a valid semantic version",
            file_path.display(),
            raw
        ))
    })
}

/// Normalizes a raw manifest version string into a [Version].
///
/// Trims surrounding whitespace, strips a leading `=`, `v` or `V`, and
/// discards build metadata. Manifests in the wild carry all of these.
pub fn clean_version(raw: &str) -> Option<Version> {
    let cleaned = raw
        .trim()
        .trim_start_matches('=')
        .trim_start_matches('v')
        .trim_start_matches('V');

    let mut version = Version::parse(cleaned).ok()?;
    version.build = BuildMetadata::EMPTY;
    Some(version)
}
