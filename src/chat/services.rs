use std::sync::Arc;

use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::{
    chat::client::{CompletionClient, CompletionRequest, Message},
    config::ChatConfig,
};

pub const SYSTEM_PROMPT: &str = "You are a friendly and helpful assistant for this website. \
Answer questions clearly and concisely, and keep a warm, professional tone.";

pub const FALLBACK_REPLY: &str =
    "I'm sorry, I'm having trouble responding right now. Please try again in a moment.";

pub const MAX_COMPLETION_TOKENS: u32 = 500;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("chat completion API key is not configured")]
    NotConfigured,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
    pub is_fallback: bool,
}

impl ChatReply {
    fn fallback() -> Self {
        Self {
            text: FALLBACK_REPLY.to_string(),
            is_fallback: true,
        }
    }
}

/// Stateless bridge to the completion API. Upstream failures never escape:
/// they turn into [`FALLBACK_REPLY`].
pub struct ChatProxy {
    api_key: Option<String>,
    model: String,
    client: Arc<dyn CompletionClient>,
}

impl ChatProxy {
    pub fn new(config: &ChatConfig, client: Arc<dyn CompletionClient>) -> Self {
        Self {
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            client,
        }
    }

    #[instrument(skip_all, fields(model = %self.model))]
    pub async fn complete(&self, user_message: &str) -> Result<ChatReply, ChatError> {
        let Some(api_key) = self.api_key.as_deref() else {
            warn!("chat requested but no API key is configured");
            return Err(ChatError::NotConfigured);
        };

        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![Message::system(SYSTEM_PROMPT), Message::user(user_message)],
            max_tokens: MAX_COMPLETION_TOKENS,
        };

        match self.client.complete(api_key, &request).await {
            Ok(text) => {
                info!("chat reply generated");
                Ok(ChatReply {
                    text,
                    is_fallback: false,
                })
            }
            Err(e) => {
                let detail = format!("{e:#}");
                warn!(error = %detail, "completion failed, sending fallback reply");
                Ok(ChatReply::fallback())
            }
        }
    }
}
