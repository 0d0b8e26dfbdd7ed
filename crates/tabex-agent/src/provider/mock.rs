//! Canned-response provider for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::Provider;
use crate::error::{AgentError, Result};

/// Replays queued responses in order; once drained it returns an empty plan.
/// Can also simulate provider failure.
#[derive(Debug, Default)]
pub struct MockProvider {
    responses: Mutex<VecDeque<String>>,
    fail: bool,
}

impl MockProvider {
    pub fn with_response(response: impl Into<String>) -> Self {
        let provider = Self::default();
        provider.push_response(response);
        provider
    }

    pub fn failing() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            fail: true,
        }
    }

    pub fn push_response(&self, response: impl Into<String>) {
        self.responses
            .lock()
            .expect("mock provider lock poisoned")
            .push_back(response.into());
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn complete(&self, _prompt: &str) -> Result<String> {
        if self.fail {
            return Err(AgentError::Provider("mock provider failure".into()));
        }
        let reply = self
            .responses
            .lock()
            .expect("mock provider lock poisoned")
            .pop_front()
            .unwrap_or_else(|| r#"{"steps": []}"#.to_string());
        Ok(reply)
    }
}
