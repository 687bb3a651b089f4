//! Configuration types for the ARMOR client

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ClientError, Result};

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

pub const ENV_API_URL: &str = "ARMOR_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "ARMOR_TIMEOUT_SECS";
pub const ENV_SESSION_DIR: &str = "ARMOR_SESSION_DIR";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Client configuration (armor.json)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Root of the REST API, e.g. `https://armor.example.com/api`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout. No timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Directory holding the session credential file
    #[serde(default)]
    pub session_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            session_dir: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Apply `ARMOR_*` environment overrides
    pub fn with_env(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.is_empty()) {
            self.base_url = url;
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS).filter(|v| !v.is_empty()) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                ClientError::Config(format!("{} must be a whole number of seconds, got '{}'", ENV_TIMEOUT_SECS, raw))
            })?;
            self.timeout_secs = Some(secs);
        }

        if let Some(dir) = lookup(ENV_SESSION_DIR).filter(|v| !v.is_empty()) {
            self.session_dir = Some(PathBuf::from(dir));
        }

        Ok(self)
    }

    /// Replace the base URL
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<()> {
        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if self.timeout_secs == Some(0) {
            return Err(ClientError::Config("timeout must be greater than zero".to_string()));
        }
        Ok(())
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
