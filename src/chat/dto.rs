use serde::{Deserialize, Serialize};

use crate::{chat::services::ChatReply, error::AppError, extract::required};

/// Request body for the chatbot.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
}

impl ChatRequest {
    pub fn validate(self) -> Result<String, AppError> {
        required(self.message).ok_or(AppError::Validation("Message is required"))
    }
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<bool>, // only sent on degraded replies
}

impl From<ChatReply> for ChatResponse {
    fn from(reply: ChatReply) -> Self {
        Self {
            response: reply.text,
            fallback: reply.is_fallback.then_some(true),
        }
    }
}
