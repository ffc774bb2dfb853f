use serde::Serialize;
use utoipa::ToSchema;

/// Body of every error response and of message-only replies.
#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Confirmation returned by delete and logout endpoints.
#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct SuccessBody {
    pub message: String,
    pub success: bool,
}

impl SuccessBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }
}
