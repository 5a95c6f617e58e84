//! Response DTOs for the posts API
//!
//! Successful responses serialize `Post` values directly; this module holds
//! the error body shared by every failure.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Message describing what went wrong
    #[schema(example = "not found")]
    pub message: String,
}

impl MessageResponse {
    /// Creates a new MessageResponse
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_response_serialize() {
        let resp = MessageResponse::new("please include a title");
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"message":"please include a title"}"#);
    }
}
