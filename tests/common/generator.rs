//! Text generator double
//!
//! Answers every prompt with a fixed reply (or a fixed failure) and records
//! what it was asked.

use std::sync::Mutex;

use async_trait::async_trait;
use up2d8::backend::ai::{AiError, TextGenerator};
use up2d8::shared::ChatMessage;

/// One recorded `generate` call
#[derive(Debug, Clone)]
pub struct Call {
    pub history: Vec<ChatMessage>,
    pub prompt: String,
}

pub struct ScriptedGenerator {
    outcome: Result<String, String>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedGenerator {
    pub fn replying(text: &str) -> Self {
        Self {
            outcome: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, history: &[ChatMessage], prompt: &str) -> Result<String, AiError> {
        self.calls.lock().unwrap().push(Call {
            history: history.to_vec(),
            prompt: prompt.to_string(),
        });
        self.outcome.clone().map_err(AiError::Client)
    }
}

/// Holds every `generate` call until [`GatedGenerator::release`]
///
/// Each call reports on `started` as soon as it begins waiting.
pub struct GatedGenerator {
    started: tokio::sync::mpsc::UnboundedSender<()>,
    gate: tokio::sync::Semaphore,
}

impl GatedGenerator {
    pub fn new(started: tokio::sync::mpsc::UnboundedSender<()>) -> Self {
        Self {
            started,
            gate: tokio::sync::Semaphore::new(0),
        }
    }

    /// Let `calls` waiting calls finish
    pub fn release(&self, calls: usize) {
        self.gate.add_permits(calls);
    }
}

#[async_trait]
impl TextGenerator for GatedGenerator {
    async fn generate(&self, _history: &[ChatMessage], prompt: &str) -> Result<String, AiError> {
        let _ = self.started.send(());
        let permit = self
            .gate
            .acquire()
            .await
            .map_err(|e| AiError::Client(e.to_string()))?;
        permit.forget();
        Ok(format!("reply to {prompt}"))
    }
}
