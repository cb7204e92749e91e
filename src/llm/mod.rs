//! Generative text completion
//!
//! The response generator only depends on [`TextCompletion`]; the Gemini
//! client is the production implementation.

pub mod gemini;

use anyhow::Result;
use async_trait::async_trait;

pub use gemini::GeminiClient;

/// A single-prompt, single-attempt text completion capability.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    /// Short provider/model name for logs and health output
    fn name(&self) -> &str;

    async fn complete(&self, prompt: &str) -> Result<String>;
}
