mod open_ai;
mod prompt;

pub use open_ai::OpenAICompatibleProvider;
pub use prompt::build_recipe_prompt;

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while talking to a completion service
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The service answered with a non-success status; `body` is kept verbatim
    #[error("completion service returned status {status}")]
    Status { status: u16, body: String },

    #[error("request to completion service failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected completion response: {0}")]
    MalformedResponse(String),

    #[error("{0} not found in config or environment")]
    MissingApiKey(&'static str),
}

/// A text-completion service: one prompt in, one block of text out
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Get the provider name (e.g., "openai")
    fn provider_name(&self) -> &str;

    /// Send `prompt` as a single user message and return the reply text
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}
