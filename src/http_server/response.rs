//! Response bodies that are not materials themselves

use serde::{Deserialize, Serialize};

/// Plain confirmation, e.g. after a delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn deleted(id: i32) -> Self {
        Self::new(format!("Material {} deleted", id))
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deleted_message() {
        let json = serde_json::to_value(MessageResponse::deleted(3)).unwrap();
        assert_eq!(json["message"], "Material 3 deleted");
    }
}
