//! The request pass: normalize -> vectorize -> predict -> generate.

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

use crate::classifier::{Intent, IntentClassifier};
use crate::generator::ResponseGenerator;
use crate::text::normalize;

/// Shown when the user submits nothing
pub const EMPTY_INPUT_WARNING: &str = "Please type something first.";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("{}", EMPTY_INPUT_WARNING)]
    EmptyInput,
}

/// Everything produced for one submission
#[derive(Debug, Clone, Serialize)]
pub struct SupportReply {
    pub intent: Intent,
    pub response: String,
    pub cleaned: String,
}

#[derive(Clone)]
pub struct SupportPipeline {
    classifier: Arc<dyn IntentClassifier>,
    generator: ResponseGenerator,
}

impl SupportPipeline {
    pub fn new(classifier: Arc<dyn IntentClassifier>, generator: ResponseGenerator) -> Self {
        Self { classifier, generator }
    }

    pub fn generator(&self) -> &ResponseGenerator {
        &self.generator
    }

    /// Run one submission. Blank input is rejected before any stage runs.
    ///
    /// "Blank" includes whitespace-only input such as `"   "` or `"\n"`, which
    /// is rejected here even though it is a non-empty string. Input that is
    /// non-blank but normalizes to nothing (`"123"`) still runs the full pass.
    pub async fn handle(&self, raw_input: &str) -> Result<SupportReply, PipelineError> {
        if raw_input.trim().is_empty() {
            return Err(PipelineError::EmptyInput);
        }

        let cleaned = normalize(raw_input);
        debug!("Cleaned input: {:?}", cleaned);

        let intent = self.classifier.classify(&cleaned);
        info!("Detected intent: {}", intent);

        let response = self.generator.generate(raw_input, &intent).await;

        Ok(SupportReply { intent, response, cleaned })
    }
}
