//! Semantic-version validation and precedence ordering
//!
//! Accepted syntax is `major.minor.patch` with optional `-prerelease` and
//! `+build` suffixes and an optional leading `v` (as used by most release
//! tags). Partial versions such as `v1.2` are rejected.

use std::cmp::Ordering;

use semver::Version;

use crate::release::error::{VersionError, VersionRole};

/// Parse a version string into a semver::Version, stripping one leading 'v'.
///
/// Examples:
/// - "v1.2.3" -> Version(1, 2, 3)
/// - "1.2.3-rc.1+build.5" -> Version(1, 2, 3, pre: rc.1, build: build.5)
/// - "1.2" -> None
pub fn parse_version(version: &str) -> Option<Version> {
    let version = version.strip_prefix('v').unwrap_or(version);
    Version::parse(version).ok()
}

/// Compares the installed version against the latest one.
///
/// Returns `Less` when an update is available, `Equal` when both have the
/// same precedence and `Greater` when the installed version is ahead.
/// `ordering as i32` gives -1, 0 or 1.
pub fn compare_versions(installed: &str, latest: &str) -> Result<Ordering, VersionError> {
    let installed = parse_role(installed, VersionRole::Installed)?;
    let latest = parse_role(latest, VersionRole::Latest)?;
    Ok(precedence(&installed, &latest))
}

fn parse_role(version: &str, role: VersionRole) -> Result<Version, VersionError> {
    parse_version(version).ok_or_else(|| VersionError::Invalid {
        role,
        version: version.to_string(),
    })
}

// Build metadata does not take part in precedence, unlike `Version`'s `Ord`.
fn precedence(a: &Version, b: &Version) -> Ordering {
    (a.major, a.minor, a.patch, &a.pre).cmp(&(b.major, b.minor, b.patch, &b.pre))
}
