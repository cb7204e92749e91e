// src/config/mod.rs
// Load all settings from the environment (and an optional .env file), with defaults

use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, Deserialize)]
pub struct ClarityConfig {
    // ── Server Configuration
    pub host: String,
    pub port: u16,

    // ── Model Artifacts
    pub model_path: PathBuf,
    pub vectorizer_path: PathBuf,

    // ── Generation Configuration
    pub assistant_name: String,
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub generation_timeout_secs: u64,

    // ── Logging Configuration
    pub log_level: String,
}

/// Parse a raw environment value, tolerating trailing `# comments` and whitespace.
/// Missing or unparsable values fall back to `default`.
fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr,
{
    match raw {
        Some(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    // Tracing is not installed yet when config loads
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        None => default,
    }
}

/// Optional string setting; empty (or comment-only) values count as unset.
fn optional(raw: Option<String>) -> Option<String> {
    raw.map(|val| val.split('#').next().unwrap_or("").trim().to_string())
        .filter(|val| !val.is_empty())
}

impl ClarityConfig {
    /// Load from `.env` (if present) and the process environment.
    pub fn from_env() -> Self {
        // A missing .env is normal in production; the environment still applies
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. `from_env` passes the process
    /// environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| -> String {
            parse_or(key, lookup(key), default.to_string())
        };

        Self {
            host: var_or("CLARITY_HOST", "127.0.0.1"),
            port: parse_or("CLARITY_PORT", lookup("CLARITY_PORT"), 8501),
            model_path: parse_or(
                "CLARITY_MODEL_PATH",
                lookup("CLARITY_MODEL_PATH"),
                PathBuf::from("models/intent_model.json"),
            ),
            vectorizer_path: parse_or(
                "CLARITY_VECTORIZER_PATH",
                lookup("CLARITY_VECTORIZER_PATH"),
                PathBuf::from("models/tfidf_vectorizer.json"),
            ),
            assistant_name: var_or("CLARITY_ASSISTANT_NAME", "Clarity"),
            gemini_api_key: optional(lookup("GEMINI_API_KEY")),
            gemini_base_url: var_or("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL),
            gemini_model: var_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            generation_timeout_secs: parse_or(
                "CLARITY_GENERATION_TIMEOUT_SECS",
                lookup("CLARITY_GENERATION_TIMEOUT_SECS"),
                DEFAULT_GENERATION_TIMEOUT_SECS,
            ),
            log_level: var_or("CLARITY_LOG_LEVEL", "info"),
        }
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }

    /// Whether a credential for the generative API was supplied
    pub fn generation_enabled(&self) -> bool {
        self.gemini_api_key.is_some()
    }

    /// Check if debug logging is enabled
    pub fn is_debug(&self) -> bool {
        self.log_level.eq_ignore_ascii_case("debug")
    }

    /// Map the configured level name onto a tracing level, defaulting to INFO
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}
