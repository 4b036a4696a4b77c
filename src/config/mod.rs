//! Client configuration
//!
//! Holds the API endpoint and credentials, read from serde sources or the
//! environment, plus the fixed limits of the judging flow.

use serde::Deserialize;

use crate::error::{JuryError, Result};

/// Maximum number of projects a judge may rank
pub const MAX_RANKED: usize = 5;

/// Configuration for talking to the judging platform
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the REST API, e.g. `https://jury.example.org/api`
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Judge bearer token, taken from the judge login cookie
    #[serde(default)]
    pub judge_token: Option<String>,

    /// Admin password, sent as HTTP basic auth
    #[serde(default)]
    pub admin_password: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            judge_token: None,
            admin_password: None,
            timeout_secs: default_timeout(),
        }
    }
}

impl ClientConfig {
    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `JURY_API_URL` | API base URL |
    /// | `JURY_JUDGE_TOKEN` | Judge bearer token |
    /// | `JURY_ADMIN_PASSWORD` | Admin password |
    /// | `JURY_TIMEOUT_SECS` | Request timeout |
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("JURY_API_URL").unwrap_or_else(|_| default_api_url()),
            judge_token: std::env::var("JURY_JUDGE_TOKEN")
                .ok()
                .filter(|t| !t.is_empty()),
            admin_password: std::env::var("JURY_ADMIN_PASSWORD")
                .ok()
                .filter(|p| !p.is_empty()),
            timeout_secs: std::env::var("JURY_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_timeout),
        }
    }

    /// Parse config from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| JuryError::Config {
            message: e.to_string(),
        })
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_judge_token(mut self, token: impl Into<String>) -> Self {
        self.judge_token = Some(token.into());
        self
    }

    pub fn with_admin_password(mut self, password: impl Into<String>) -> Self {
        self.admin_password = Some(password.into());
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Check the config is usable before building a client
    pub fn validate(&self) -> Result<()> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(JuryError::Config {
                message: format!("api_url must be http(s): {}", self.api_url),
            });
        }
        if self.timeout_secs == 0 {
            return Err(JuryError::Config {
                message: "timeout_secs must be positive".to_string(),
            });
        }
        Ok(())
    }
}
