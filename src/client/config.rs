//! Form client configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings for the form client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API root (default: "http://localhost:5000")
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout in seconds (default: transport default)
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Show placeholder data when the API cannot be reached (default: false)
    #[serde(default)]
    pub offline_fallback: bool,
}

fn default_api_base_url() -> String {
    "http://localhost:5000".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            timeout_secs: None,
            offline_fallback: false,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Default::default()
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn validate(&self) -> Result<(), String> {
        let url = &self.api_base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(format!(
                "client.api_base_url must start with http:// or https:// (got '{}')",
                url
            ));
        }
        Ok(())
    }
}
