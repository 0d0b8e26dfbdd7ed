//! LLM provider abstraction: prompt in, raw completion text out.
//!
//! The engine only relies on the returned text being *attempted* JSON; plan
//! decoding downstream absorbs anything else.

use async_trait::async_trait;

use crate::error::{AgentError, Result};

mod mock;
mod openai;

pub use mock::MockProvider;
pub use openai::OpenAiProvider;

#[async_trait]
pub trait Provider: Send + Sync {
    fn name(&self) -> &str;

    /// Send one prompt and return the raw completion text.
    async fn complete(&self, prompt: &str) -> Result<String>;

    fn is_available(&self) -> bool {
        true
    }
}

impl std::fmt::Debug for dyn Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Provider({})", self.name())
    }
}

/// Instantiate a provider by name.
pub fn create_provider(name: &str) -> Result<Box<dyn Provider>> {
    match name {
        "openai" => Ok(Box::new(OpenAiProvider::from_env()?)),
        "mock" => Ok(Box::new(MockProvider::default())),
        other => Err(AgentError::Config(format!("unknown provider '{other}'"))),
    }
}
