//! Manifest baseline extraction tests over on-disk fixtures.

use std::fs;
use std::path::Path;

use semver::Version;
use tempfile::TempDir;

use ci_version::error::CiVersionError;
use ci_version::manifest::{read_baseline, ManifestKind};

fn write_manifest(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

#[test]
fn test_reads_package_json_version() {
    let dir = TempDir::new().unwrap();
    write_manifest(
        dir.path(),
        "package.json",
        r#"{ "name": "demo", "version": "1.2.3" }"#,
    );

    let baseline =
        read_baseline(dir.path(), Path::new("."), ManifestKind::PackageJson).unwrap();
    assert_eq!(baseline, Version::new(1, 2, 3));
}

#[test]
fn test_reads_composer_json_version() {
    let dir = TempDir::new().unwrap();
    write_manifest(
        dir.path(),
        "composer.json",
        r#"{ "name": "vendor/demo", "version": "0.4.1" }"#,
    );

    let baseline =
        read_baseline(dir.path(), Path::new("."), ManifestKind::ComposerJson).unwrap();
    assert_eq!(baseline, Version::new(0, 4, 1));
}

#[test]
fn test_manifest_in_subdirectory() {
    let dir = TempDir::new().unwrap();
    let sub = dir.path().join("packages/core");
    fs::create_dir_all(&sub).unwrap();
    write_manifest(&sub, "package.json", r#"{ "version": "2.0.0" }"#);

    let baseline = read_baseline(
        dir.path(),
        Path::new("packages/core"),
        ManifestKind::PackageJson,
    )
    .unwrap();
    assert_eq!(baseline, Version::new(2, 0, 0));
}

#[test]
fn test_missing_manifest_names_file_and_path() {
    let dir = TempDir::new().unwrap();

    let err = read_baseline(dir.path(), Path::new("sub"), ManifestKind::PackageJson).unwrap_err();
    assert!(matches!(err, CiVersionError::ManifestNotFound { .. }));

    let msg = err.to_string();
    assert!(msg.contains("package.json"));
    assert!(msg.contains("sub"));
}

#[test]
fn test_invalid_json_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path(), "package.json", "{ not json");

    let err = read_baseline(dir.path(), Path::new("."), ManifestKind::PackageJson).unwrap_err();
    assert!(matches!(err, CiVersionError::ManifestParse(_)));
}

#[test]
fn test_missing_version_field_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path(), "package.json", r#"{ "name": "demo" }"#);

    let err = read_baseline(dir.path(), Path::new("."), ManifestKind::PackageJson).unwrap_err();
    assert!(matches!(err, CiVersionError::ManifestParse(_)));
    assert!(err.to_string().contains("version"));
}

#[test]
fn test_unparseable_version_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path(), "package.json", r#"{ "version": "latest" }"#);

    let err = read_baseline(dir.path(), Path::new("."), ManifestKind::PackageJson).unwrap_err();
    assert!(matches!(err, CiVersionError::ManifestParse(_)));
}

#[test]
fn test_decorated_version_is_cleaned() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path(), "package.json", r#"{ "version": " v1.5.0 " }"#);

    let baseline =
        read_baseline(dir.path(), Path::new("."), ManifestKind::PackageJson).unwrap();
    assert_eq!(baseline, Version::new(1, 5, 0));
}
