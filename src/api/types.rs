// src/api/types.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/support`. `message` is accepted as any JSON value;
/// anything other than a non-blank string is treated as empty input.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SupportRequest {
    #[serde(default)]
    pub message: Value,
}

/// Body of the form submission on `POST /`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupportForm {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub model: Option<String>,
    pub generation_enabled: bool,
    pub timestamp: String,
}
