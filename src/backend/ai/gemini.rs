/**
 * Gemini Text Generation
 *
 * Wraps a `genai::Client` whose auth resolver always answers with the API key
 * loaded from the secret store, so the key never has to be exported into the
 * process environment.
 */

use async_trait::async_trait;
use genai::chat::{ChatMessage as GenaiMessage, ChatRequest};
use genai::resolver::{AuthData, AuthResolver};
use genai::{Client, ModelIden};

use super::{AiError, TextGenerator};
use crate::shared::{ChatMessage, Role};

/// Gemini-backed [`TextGenerator`]
pub struct GeminiGenerator {
    client: Client,
    model: String,
}

impl GeminiGenerator {
    /// Create a generator for `model` authenticating with `api_key`
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let api_key: String = api_key.into();
        let auth_resolver = AuthResolver::from_resolver_fn(
            move |_model_iden: ModelIden| -> Result<Option<AuthData>, genai::resolver::Error> {
                Ok(Some(AuthData::from_single(api_key.clone())))
            },
        );
        let client = Client::builder().with_auth_resolver(auth_resolver).build();

        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Convert stored session turns plus the new prompt into a genai request
fn build_request(history: &[ChatMessage], prompt: &str) -> ChatRequest {
    let mut messages: Vec<GenaiMessage> = history
        .iter()
        .map(|message| match message.role {
            Role::User => GenaiMessage::user(message.content.clone()),
            Role::Assistant => GenaiMessage::assistant(message.content.clone()),
        })
        .collect();
    messages.push(GenaiMessage::user(prompt.to_string()));
    ChatRequest::new(messages)
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, history: &[ChatMessage], prompt: &str) -> Result<String, AiError> {
        let request = build_request(history, prompt);

        tracing::debug!(model = %self.model, turns = history.len(), "calling Gemini");
        let response = self
            .client
            .exec_chat(self.model.as_str(), request, None)
            .await
            .map_err(|e| AiError::Client(e.to_string()))?;

        response
            .first_text()
            .map(str::to_string)
            .ok_or(AiError::EmptyResponse)
    }
}
