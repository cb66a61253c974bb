//! Fetch-then-compare update check

use std::cmp::Ordering;

use tracing::debug;

use crate::release::error::CheckError;
use crate::release::semver::compare_versions;
use crate::release::source::{LatestRelease, ReleaseSource};

/// Result of checking an installed version against the latest release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCheck {
    /// Installed version as given by the caller
    pub installed: String,
    /// Latest release reported by the source
    pub latest: LatestRelease,
    pub status: UpdateStatus,
}

/// Status of the installed version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStatus {
    /// Installed version is the latest
    UpToDate,
    /// A newer release is available
    UpdateAvailable,
    /// Installed version is newer than the latest release (development build)
    Ahead,
}

impl From<Ordering> for UpdateStatus {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => UpdateStatus::UpdateAvailable,
            Ordering::Equal => UpdateStatus::UpToDate,
            Ordering::Greater => UpdateStatus::Ahead,
        }
    }
}

/// Fetches the latest release of `owner/repo` and compares it with `installed`
pub async fn check_for_update<S: ReleaseSource + ?Sized>(
    source: &S,
    owner: &str,
    repo: &str,
    installed: &str,
) -> Result<UpdateCheck, CheckError> {
    let latest = source.fetch_latest_release(owner, repo).await?;
    let ordering = compare_versions(installed, &latest.tag_name)?;
    debug!(
        "{}/{}: installed {} vs latest {} -> {:?}",
        owner, repo, installed, latest.tag_name, ordering
    );

    Ok(UpdateCheck {
        installed: installed.to_string(),
        latest,
        status: ordering.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release::error::{ReleaseError, VersionError, VersionRole};
    use crate::release::source::MockReleaseSource;
    use rstest::rstest;

    fn source_returning(tag: &'static str) -> MockReleaseSource {
        let mut source = MockReleaseSource::new();
        source
            .expect_fetch_latest_release()
            .withf(|owner, repo| owner == "owner" && repo == "repo")
            .times(1)
            .returning(move |_, _| Ok(LatestRelease::new(tag)));
        source
    }

    #[rstest]
    #[case("v1.2.3", "v1.2.3", UpdateStatus::UpToDate)]
    #[case("v1.2.3", "v1.3.0", UpdateStatus::UpdateAvailable)]
    #[case("v2.0.0", "v1.9.9", UpdateStatus::Ahead)]
    #[case("v1.0.0-rc.1", "v1.0.0", UpdateStatus::UpdateAvailable)]
    #[tokio::test]
    async fn check_for_update_returns_status(
        #[case] installed: &str,
        #[case] latest: &'static str,
        #[case] expected: UpdateStatus,
    ) {
        let source = source_returning(latest);

        let result = check_for_update(&source, "owner", "repo", installed)
            .await
            .unwrap();

        assert_eq!(
            result,
            UpdateCheck {
                installed: installed.to_string(),
                latest: LatestRelease::new(latest),
                status: expected,
            }
        );
    }

    #[tokio::test]
    async fn check_for_update_propagates_fetch_errors() {
        let mut source = MockReleaseSource::new();
        source
            .expect_fetch_latest_release()
            .times(1)
            .returning(|_, _| Err(ReleaseError::NotFound("owner/repo".to_string())));

        let result = check_for_update(&source, "owner", "repo", "v1.0.0").await;

        assert!(matches!(
            result,
            Err(CheckError::Release(ReleaseError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn check_for_update_reports_non_semver_latest_tag() {
        let source = source_returning("nightly-2024-01-15");

        let result = check_for_update(&source, "owner", "repo", "v1.0.0").await;

        assert!(matches!(
            result,
            Err(CheckError::Version(VersionError::Invalid {
                role: VersionRole::Latest,
                ..
            }))
        ));
    }

    #[tokio::test]
    async fn check_for_update_reports_invalid_installed_version() {
        let source = source_returning("v1.0.0");

        let result = check_for_update(&source, "owner", "repo", "dev").await;

        assert!(matches!(
            result,
            Err(CheckError::Version(VersionError::Invalid {
                role: VersionRole::Installed,
                ..
            }))
        ));
    }
}
