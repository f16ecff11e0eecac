use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response and of most mutation responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    /// Human readable outcome
    pub msg: String,
}

impl MessageDto {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
