// src/classifier/error.rs

use std::path::PathBuf;

/// Failures while loading the vectorizer/classifier artifacts.
///
/// All of these are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("Model artifact missing: {}", .path.display())]
    Missing { path: PathBuf },

    #[error("Failed to read model artifact {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse model artifact {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid model artifact: {0}")]
    Invalid(String),
}

impl ArtifactError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}
