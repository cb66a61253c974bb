use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Default base URL for the GitHub API
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Timeout for the latest-release request in milliseconds (5 seconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// User agent sent with every request; GitHub rejects requests without one
pub const DEFAULT_USER_AGENT: &str = concat!("release-check/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Top-level configuration file structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub fetch: FetchConfig,
}

/// Settings for the latest-release request
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FetchConfig {
    pub base_url: String,
    /// Request timeout in milliseconds, covering connect through body read; must be non-zero
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Config {
    /// Loads the config file at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Returns the path to the config directory for release-check.
/// Uses $XDG_CONFIG_HOME/release-check if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/release-check,
/// or ./release-check if neither is available.
pub fn config_dir() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the default config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("release-check")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<Config>(json!({
            "fetch": {
                "timeoutMs": 15000
            }
        }))
        .unwrap();

        assert_eq!(result.fetch.timeout_ms, 15000);
        assert_eq!(result.fetch.base_url, DEFAULT_BASE_URL);
        assert_eq!(result.fetch.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<Config>(json!({
            "fetch": {
                "baseUrl": "https://github.example.com/api/v3",
                "timeoutMs": 2500,
                "userAgent": "my-tool/1.0"
            }
        }))
        .unwrap();

        assert_eq!(
            result,
            Config {
                fetch: FetchConfig {
                    base_url: "https://github.example.com/api/v3".to_string(),
                    timeout_ms: 2500,
                    user_agent: "my-tool/1.0".to_string(),
                }
            }
        );
    }

    #[test]
    fn default_timeout_is_five_seconds() {
        assert_eq!(FetchConfig::default().timeout(), Duration::from_secs(5));
    }

    #[test]
    fn load_returns_defaults_when_file_is_missing() {
        let temp_dir = TempDir::new().unwrap();

        let config = Config::load(&temp_dir.path().join("config.json")).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_reads_values_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"fetch": {"timeoutMs": 30000}}"#).unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.fetch.timeout_ms, 30000);
    }

    #[test]
    fn load_returns_json_error_for_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = Config::load(&path);

        assert!(matches!(result, Err(ConfigError::Json { .. })));
    }

    #[test]
    fn config_dir_with_env_uses_xdg_config_home_when_set() {
        let path = config_dir_with_env(
            Some("/tmp/test-config".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/tmp/test-config/release-check"));
    }

    #[test]
    fn config_dir_with_env_falls_back_to_home_config() {
        let path = config_dir_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(path, PathBuf::from("/home/user/.config/release-check"));
    }

    #[test]
    fn config_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = config_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./release-check"));
    }
}
