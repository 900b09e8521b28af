//! API server settings: bind address and CORS origins.

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};

/// `[server]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed browser origins. Empty means any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// `host:port` as given; parsed when the server binds
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Origins as header values, or the first one that cannot be used
    pub fn cors_origin_headers(&self) -> Result<Vec<HeaderValue>, String> {
        self.cors_origins.iter().map(|o| parse_origin(o)).collect()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("server.port must be > 0".to_string());
        }
        self.cors_origin_headers().map(|_| ())
    }
}

/// One `scheme://host[:port]` origin as a header value
pub fn parse_origin(origin: &str) -> Result<HeaderValue, String> {
    let invalid = || format!("server.cors_origins: '{}' is not an http(s) origin", origin);

    let rest = origin
        .strip_prefix("http://")
        .or_else(|| origin.strip_prefix("https://"))
        .ok_or_else(invalid)?;
    if rest.is_empty() || rest.contains('/') || rest.contains(char::is_whitespace) {
        return Err(invalid());
    }
    HeaderValue::from_str(origin).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpServerConfig::default();
        assert_eq!(config.socket_addr(), "0.0.0.0:5000");
        assert!(config.cors_origins.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_valid_origins() {
        let config = HttpServerConfig {
            cors_origins: vec![
                "http://localhost:3000".to_string(),
                "https://inventory.example".to_string(),
            ],
            ..Default::default()
        };
        assert_eq!(config.cors_origin_headers().unwrap().len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_origins_rejected() {
        let bad_origins = [
            "localhost:3000",
            "http://",
            "http://a.example/path",
            "ftp://a.example",
            "http://a b",
        ];
        for bad in bad_origins {
            let config = HttpServerConfig {
                cors_origins: vec![bad.to_string()],
                ..Default::default()
            };
            let err = config.validate().unwrap_err();
            assert!(err.contains(bad), "{}", err);
        }
    }

    #[test]
    fn test_zero_port_rejected() {
        assert!(HttpServerConfig::with_port(0).validate().is_err());
    }
}
