//! Source trait for looking up the latest release of a project

#[cfg(test)]
use mockall::automock;

use crate::release::error::ReleaseError;

/// Latest release as reported by the release host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestRelease {
    /// Tag exactly as published, e.g. "v1.2.3"
    pub tag_name: String,
    /// Web page of the release, if the host reports one
    pub html_url: Option<String>,
}

impl LatestRelease {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            html_url: None,
        }
    }
}

/// Trait for fetching the latest release of a project
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Fetches the latest published release
    ///
    /// # Arguments
    /// * `owner` - Account owning the project (e.g., "rust-lang")
    /// * `repo` - Project name (e.g., "rust-analyzer")
    ///
    /// # Returns
    /// * `Ok(LatestRelease)` - The release with a non-empty tag
    /// * `Err(ReleaseError)` - If the request, status or body is unusable
    async fn fetch_latest_release(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<LatestRelease, ReleaseError>;
}
