//! Version resolution: pure functions deciding whether a new version is
//! needed and computing it from the collected version sets.
//!
//! Two mutually exclusive modes per invocation:
//!
//! - **Global mode**: versions grow monotonically from the repository's tag
//!   history alone.
//! - **Compatibility mode**: the result stays inside the caret range of a
//!   baseline version declared in an external manifest.

use semver::{BuildMetadata, Prerelease, Version, VersionReq};

use crate::collector::VersionSets;
use crate::error::{CiVersionError, Result};

/// Returns the version with its minor component incremented and the patch,
/// prerelease and build components cleared.
///
/// Minor-only bumps are deliberate: this tool serves CI-driven routine
/// releases, not semantic-impact-aware bumps.
pub fn bump_minor(version: &Version) -> Version {
    Version {
        major: version.major,
        minor: version.minor + 1,
        patch: 0,
        pre: Prerelease::EMPTY,
        build: BuildMetadata::EMPTY,
    }
}

/// Resolves a version in global mode.
///
/// If the current commit already carries a version tag there is nothing to
/// do. Otherwise the highest version in the repository is minor-bumped, or
/// `1.0.0` starts a fresh version line when no history exists. The prefix is
/// concatenated literally onto the emitted string.
///
/// # Returns
/// * `Some(version)` - The prefixed version string to release
/// * `None` - The current commit is already released
pub fn global_version(sets: &VersionSets, prefix: &str) -> Option<String> {
    if !sets.current.is_empty() {
        return None;
    }

    let next = match sets.all.iter().max() {
        Some(latest) => bump_minor(latest),
        None => Version::new(1, 0, 0),
    };

    Some(format!("{}{}", prefix, next))
}

/// Resolves a version in compatibility mode.
///
/// The baseline spans a caret range (`^baseline`). A current-commit version
/// inside the range means the commit is already released for this line.
/// Otherwise the highest in-range repository version is minor-bumped, or the
/// baseline itself starts the line when no tag is in range yet.
///
/// # Returns
/// * `Ok(Some(version))` - The version to release
/// * `Ok(None)` - The current commit already satisfies the baseline
/// * `Err` - If no caret range can be built from the baseline
pub fn compatible_version(sets: &VersionSets, baseline: &Version) -> Result<Option<Version>> {
    let range = caret_range(baseline)?;

    if sets.current.iter().any(|v| range.matches(v)) {
        return Ok(None);
    }

    let max_compatible = sets.all.iter().filter(|v| range.matches(v)).max();
    Ok(Some(match max_compatible {
        Some(latest) => bump_minor(latest),
        None => baseline.clone(),
    }))
}

/// Builds the caret requirement for a baseline version.
///
/// `VersionReq` comparators reject build metadata, so the range is built
/// without it.
fn caret_range(baseline: &Version) -> Result<VersionReq> {
    let mut baseline = baseline.clone();
    baseline.build = BuildMetadata::EMPTY;
    VersionReq::parse(&format!("^{}", baseline)).map_err(|e| {
        CiVersionError::manifest_parse(format!(
            "cannot build compatible range for '{}': {}",
            baseline, e
        ))
    })
}
