//! Supportive response generation
//!
//! Builds the fixed prompt from the user's words and the predicted intent,
//! then asks the completion capability for a reply. Failures never escape:
//! they come back as display text.

use std::sync::Arc;
use tracing::{info, warn};

use crate::classifier::Intent;
use crate::llm::TextCompletion;

/// Returned when no completion capability was configured.
pub const MISSING_API_KEY_MESSAGE: &str =
    "Error: API Key missing. Please set GEMINI_API_KEY in the environment.";

/// Prefix for replies that carry a completion failure
pub const CONNECTION_ERROR_PREFIX: &str = "Connection Error";

/// Build the generation prompt. `raw_input` and `intent` are embedded verbatim.
pub fn build_prompt(assistant_name: &str, raw_input: &str, intent: &Intent) -> String {
    format!(
        "You are a compassionate AI mental health assistant named '{assistant_name}'.\n\
         The user's intent is classified as: {intent}.\n\
         The user said: \"{raw_input}\"\n\
         \n\
         Provide a supportive, structured response (3-4 sentences):\n\
         1. Validate their feeling (e.g., \"It sounds like you are feeling...\").\n\
         2. Offer one simple, actionable coping tip (e.g., breathing, walking).\n\
         3. Gently suggest professional help if the topic is serious.\n"
    )
}

#[derive(Clone)]
pub struct ResponseGenerator {
    completion: Option<Arc<dyn TextCompletion>>,
    assistant_name: String,
}

impl ResponseGenerator {
    pub fn new(completion: Option<Arc<dyn TextCompletion>>, assistant_name: impl Into<String>) -> Self {
        Self {
            completion,
            assistant_name: assistant_name.into(),
        }
    }

    /// Whether replies can be generated at all
    pub fn is_enabled(&self) -> bool {
        self.completion.is_some()
    }

    pub fn backend_name(&self) -> Option<&str> {
        self.completion.as_deref().map(|c| c.name())
    }

    pub fn assistant_name(&self) -> &str {
        &self.assistant_name
    }

    /// Generate a reply for `raw_input` given its predicted `intent`.
    ///
    /// Always returns display text: the completion, the missing-key sentinel,
    /// or a `Connection Error: ...` message.
    pub async fn generate(&self, raw_input: &str, intent: &Intent) -> String {
        let Some(completion) = self.completion.as_deref() else {
            warn!("Generation requested but no API key is configured");
            return MISSING_API_KEY_MESSAGE.to_string();
        };

        let prompt = build_prompt(&self.assistant_name, raw_input, intent);

        match completion.complete(&prompt).await {
            Ok(text) => {
                info!("Generated {} bytes with {}", text.len(), completion.name());
                text
            }
            Err(e) => {
                warn!("Generation failed with {}: {:#}", completion.name(), e);
                format!("{CONNECTION_ERROR_PREFIX}: {e:#}")
            }
        }
    }
}
