use std::fmt;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReleaseError {
    #[error("Failed to build request: {0}")]
    RequestConstruction(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    #[error("No release found at {0}")]
    NotFound(String),

    #[error("Rate limited: retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Failed to parse JSON response: {0}")]
    Parse(String),
}

/// Which side of a comparison a version came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionRole {
    Installed,
    Latest,
}

impl fmt::Display for VersionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionRole::Installed => f.write_str("installed"),
            VersionRole::Latest => f.write_str("latest"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("{role} version is not a valid semver: {version}")]
    Invalid { role: VersionRole, version: String },
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Release(#[from] ReleaseError),

    #[error(transparent)]
    Version(#[from] VersionError),
}
