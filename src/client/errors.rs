//! Form client errors

use std::io;

use thiserror::Error;

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Client-side failures
#[derive(Debug, Error)]
pub enum ClientError {
    /// The API could not be reached at all (connect failure, timeout)
    #[error("Could not reach the API: {0}")]
    Unreachable(String),

    /// Any other transport or decoding failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// The API answered with an error status
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },

    /// Terminal input/output failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ClientError {
    /// True when the API was never reached
    pub fn is_unreachable(&self) -> bool {
        matches!(self, ClientError::Unreachable(_))
    }

    /// HTTP status returned by the API, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            ClientError::Unreachable(e.to_string())
        } else {
            ClientError::Transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ClientError::Api {
            status: 404,
            message: "Material 9 not found".to_string(),
        };
        assert_eq!(err.to_string(), "Material 9 not found (HTTP 404)");
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_unreachable());
    }

    #[test]
    fn test_unreachable() {
        let err = ClientError::Unreachable("connection refused".to_string());
        assert!(err.is_unreachable());
        assert_eq!(err.status(), None);
    }
}
