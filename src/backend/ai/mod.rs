//! Generative AI Module
//!
//! Text generation sits behind the [`TextGenerator`] trait so handlers only
//! depend on "prompt plus history in, text out". The production
//! implementation, [`GeminiGenerator`], talks to the Gemini API through the
//! `genai` crate.
//!
//! Calls are made once: no retry, no rate limiting, no timeout beyond the
//! HTTP client's own.

/// Gemini implementation
pub mod gemini;

use async_trait::async_trait;
use thiserror::Error;

use crate::shared::ChatMessage;

pub use gemini::GeminiGenerator;

/// Generation failures
#[derive(Debug, Error)]
pub enum AiError {
    /// The client or the remote API reported an error
    #[error("{0}")]
    Client(String),

    /// The model answered without any text
    #[error("the model returned no text")]
    EmptyResponse,
}

/// Something that can continue a conversation
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a reply to `prompt`, given the earlier turns in `history`
    /// (oldest first). `history` is empty for one-shot prompts.
    async fn generate(&self, history: &[ChatMessage], prompt: &str) -> Result<String, AiError>;
}
