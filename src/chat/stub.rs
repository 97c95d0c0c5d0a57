//! Recording stand-in for the completion API.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use async_trait::async_trait;

use crate::chat::client::{CompletionClient, CompletionRequest};

pub struct StubCompletion {
    outcome: Result<String, String>,
    calls: AtomicUsize,
    last: Mutex<Option<(String, CompletionRequest)>>,
}

impl StubCompletion {
    pub fn replying(text: &str) -> Self {
        Self::with_outcome(Ok(text.to_string()))
    }

    pub fn failing(error: &str) -> Self {
        Self::with_outcome(Err(error.to_string()))
    }

    fn with_outcome(outcome: Result<String, String>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last.lock().unwrap().as_ref().map(|(_, r)| r.clone())
    }

    pub fn last_api_key(&self) -> Option<String> {
        self.last.lock().unwrap().as_ref().map(|(k, _)| k.clone())
    }
}

#[async_trait]
impl CompletionClient for StubCompletion {
    async fn complete(&self, api_key: &str, request: &CompletionRequest) -> anyhow::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some((api_key.to_string(), request.clone()));
        self.outcome.clone().map_err(anyhow::Error::msg)
    }
}
