//! GitHub Releases API client

use reqwest::{StatusCode, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::FetchConfig;
use crate::release::error::ReleaseError;
use crate::release::source::{LatestRelease, ReleaseSource};

/// Response from the "latest release" endpoint
#[derive(Debug, Deserialize)]
struct Release {
    #[serde(default)]
    tag_name: Option<String>,
    #[serde(default)]
    html_url: Option<String>,
}

/// Release source backed by the GitHub Releases API
pub struct GitHubRegistry {
    client: reqwest::Client,
    base_url: Url,
    timeout: Duration,
}

impl GitHubRegistry {
    /// Creates a new GitHubRegistry from fetch settings
    pub fn new(config: &FetchConfig) -> Result<Self, ReleaseError> {
        let timeout = config.timeout();
        if timeout.is_zero() {
            return Err(ReleaseError::RequestConstruction(
                "timeout must be greater than zero".to_string(),
            ));
        }

        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ReleaseError::RequestConstruction(format!("{}: {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ReleaseError::RequestConstruction(format!(
                "{}: not usable as a base URL",
                config.base_url
            )));
        }

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(timeout)
            .build()
            .map_err(|e| ReleaseError::RequestConstruction(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// Fetches the tag of the latest release, exactly as published
    pub async fn fetch_latest_tag(&self, owner: &str, repo: &str) -> Result<String, ReleaseError> {
        self.fetch_latest_release(owner, repo)
            .await
            .map(|release| release.tag_name)
    }

    fn latest_release_url(&self, owner: &str, repo: &str) -> Result<Url, ReleaseError> {
        for segment in [owner, repo] {
            if matches!(segment, "" | "." | "..") {
                return Err(ReleaseError::RequestConstruction(format!(
                    "invalid owner/repo {:?}/{:?}",
                    owner, repo
                )));
            }
        }

        // Each segment is percent-encoded, so '/', '?' and '#' stay inside it.
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ReleaseError::RequestConstruction(format!(
                    "{}: not usable as a base URL",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["repos", owner, repo, "releases", "latest"]);
        Ok(url)
    }

    fn transport_error(&self, err: reqwest::Error, url: &Url) -> ReleaseError {
        if err.is_timeout() {
            ReleaseError::Timeout {
                url: url.to_string(),
                timeout: self.timeout,
            }
        } else if err.is_builder() {
            ReleaseError::RequestConstruction(err.to_string())
        } else {
            ReleaseError::Network(err)
        }
    }
}

#[async_trait::async_trait]
impl ReleaseSource for GitHubRegistry {
    async fn fetch_latest_release(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<LatestRelease, ReleaseError> {
        let url = self.latest_release_url(owner, repo)?;
        debug!("Fetching latest release: {}", url);

        let response = self
            .client
            .get(url.clone())
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| self.transport_error(e, &url))?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ReleaseError::NotFound(url.to_string()));
        }

        let rate_limit_exhausted = response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            == Some("0");
        if status == StatusCode::TOO_MANY_REQUESTS
            || (status == StatusCode::FORBIDDEN && rate_limit_exhausted)
        {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            warn!("GitHub API rate limit hit: {}", url);
            return Err(ReleaseError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
            return Err(ReleaseError::UnexpectedStatus {
                status,
                url: url.to_string(),
            });
        }

        let release: Release = response.json().await.map_err(|e| {
            if e.is_decode() {
                warn!("Failed to parse GitHub release response: {}", e);
                ReleaseError::Parse(e.to_string())
            } else {
                self.transport_error(e, &url)
            }
        })?;

        match release.tag_name {
            Some(tag_name) if !tag_name.is_empty() => Ok(LatestRelease {
                tag_name,
                html_url: release.html_url,
            }),
            _ => Err(ReleaseError::Parse("missing field 'tag_name'".to_string())),
        }
    }
}
