// src/api/http/router.rs
// HTTP router composition

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{health_handler, index_handler, submit_form_handler, support_api_handler};
use crate::state::AppState;

/// Full application router: form page, JSON API and health
pub fn app_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        // Form page
        .route("/", get(index_handler).post(submit_form_handler))

        // JSON API
        .route("/api/support", post(support_api_handler))

        // Health
        .route("/health", get(health_handler))

        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
