//! Intent classification
//!
//! The classifier is a pre-trained vectorizer + linear model pair exported to
//! JSON elsewhere. The rest of the crate only sees the [`IntentClassifier`]
//! trait, so tests can swap in a stub.

pub mod error;
pub mod logreg;
pub mod tfidf;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

pub use error::ArtifactError;
pub use logreg::{LinearClassifier, LinearClassifierModel};
pub use tfidf::{Norm, TfidfVectorizer, TfidfVectorizerModel};

// ============================================================================
// Core Types
// ============================================================================

/// A predicted intent label, e.g. `anxiety` or `greeting`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Intent(String);

impl Intent {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sparse feature vector: `(column, weight)` pairs sorted by column.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    dimension: usize,
    entries: Vec<(usize, f32)>,
}

impl FeatureVector {
    pub fn new(dimension: usize, mut entries: Vec<(usize, f32)>) -> Self {
        entries.sort_by_key(|(column, _)| *column);
        Self { dimension, entries }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn entries(&self) -> &[(usize, f32)] {
        &self.entries
    }

    /// True when no vocabulary term matched
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Capability
// ============================================================================

/// Vectorize + predict. Implementations must be deterministic and read-only
/// so one instance can serve concurrent requests.
pub trait IntentClassifier: Send + Sync {
    fn vectorize(&self, text: &str) -> FeatureVector;

    fn predict(&self, features: &FeatureVector) -> Intent;

    /// Run both stages on already-normalized text
    fn classify(&self, cleaned: &str) -> Intent {
        self.predict(&self.vectorize(cleaned))
    }
}

// ============================================================================
// Artifact-backed classifier
// ============================================================================

/// The classifier pair loaded from disk once at startup.
#[derive(Debug, Clone)]
pub struct ArtifactClassifier {
    vectorizer: TfidfVectorizer,
    model: LinearClassifier,
}

impl ArtifactClassifier {
    pub fn new(vectorizer: TfidfVectorizer, model: LinearClassifier) -> Self {
        Self { vectorizer, model }
    }

    /// Load and cross-validate both artifacts. Any error here means the
    /// service must not start.
    pub fn load(
        model_path: impl AsRef<Path>,
        vectorizer_path: impl AsRef<Path>,
    ) -> Result<Self, ArtifactError> {
        let vectorizer_model: TfidfVectorizerModel = read_artifact(vectorizer_path.as_ref())?;
        let classifier_model: LinearClassifierModel = read_artifact(model_path.as_ref())?;

        let vectorizer = TfidfVectorizer::from_model(vectorizer_model)?;
        let model = LinearClassifier::from_model(classifier_model, vectorizer.dimension())?;

        info!(
            "Loaded intent classifier: {} features, {} intents",
            vectorizer.dimension(),
            model.classes().len()
        );

        Ok(Self::new(vectorizer, model))
    }

    pub fn intents(&self) -> &[Intent] {
        self.model.classes()
    }
}

impl IntentClassifier for ArtifactClassifier {
    fn vectorize(&self, text: &str) -> FeatureVector {
        self.vectorizer.transform(text)
    }

    fn predict(&self, features: &FeatureVector) -> Intent {
        self.model.predict(features)
    }
}

fn read_artifact<T>(path: &Path) -> Result<T, ArtifactError>
where
    T: for<'de> Deserialize<'de>,
{
    let file = File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ArtifactError::Missing { path: path.to_path_buf() }
        } else {
            ArtifactError::Io { path: path.to_path_buf(), source }
        }
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
