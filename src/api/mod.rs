// src/api/mod.rs
// HTTP surface: form page, JSON endpoint, health

pub mod error;
pub mod http;
pub mod types;

pub use error::{ApiError, ApiResult};
pub use http::router::app_router;
pub use types::*;
