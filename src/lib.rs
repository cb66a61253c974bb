//! Check whether a newer release of a project is published on GitHub.
//!
//! The crate exposes two independent operations that a caller composes:
//!
//! - [`fetch_latest_tag`]: ask the GitHub Releases API for the tag of the
//!   latest release of `owner/repo`
//! - [`compare_versions`]: order an installed version against a latest
//!   version using semantic-versioning precedence
//!
//! [`release::checker::check_for_update`] runs both in sequence.

pub mod config;
pub mod logging;
pub mod release;

pub use release::error::{CheckError, ReleaseError, VersionError, VersionRole};
pub use release::github::GitHubRegistry;
pub use release::semver::compare_versions;

use config::FetchConfig;

/// Fetches the latest release tag of `owner/repo` from api.github.com with
/// the default timeout.
pub async fn fetch_latest_tag(owner: &str, repo: &str) -> Result<String, ReleaseError> {
    GitHubRegistry::new(&FetchConfig::default())?
        .fetch_latest_tag(owner, repo)
        .await
}
