// src/api/http/handlers.rs
// HTTP handlers for the form page, the JSON endpoint and health

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{Html, IntoResponse},
    Form, Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::debug;

use super::page::{render_page, PageView};
use crate::api::error::{ApiError, ApiResult};
use crate::api::types::{HealthResponse, SupportForm, SupportRequest};
use crate::pipeline::{PipelineError, SupportReply};
use crate::state::AppState;

/// Health check handler
pub async fn health_handler(State(app_state): State<Arc<AppState>>) -> impl IntoResponse {
    let generator = app_state.pipeline.generator();
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: generator.backend_name().map(str::to_string),
        generation_enabled: generator.is_enabled(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// `GET /` - the empty form
pub async fn index_handler(State(app_state): State<Arc<AppState>>) -> Html<String> {
    let name = app_state.pipeline.generator().assistant_name();
    Html(render_page(name, PageView::Empty))
}

/// `POST /` - form submission, re-renders the page with the result
pub async fn submit_form_handler(
    State(app_state): State<Arc<AppState>>,
    Form(form): Form<SupportForm>,
) -> Html<String> {
    let name = app_state.pipeline.generator().assistant_name();

    match app_state.pipeline.handle(&form.message).await {
        Ok(reply) => Html(render_page(name, PageView::Reply { input: &form.message, reply: &reply })),
        Err(error) => Html(render_page(name, PageView::Warning(&error.to_string()))),
    }
}

/// `POST /api/support` - JSON in, `{intent, response, cleaned}` out
///
/// Body rejections (bad JSON, wrong content type) come back as the same JSON
/// error shape as every other API failure.
pub async fn support_api_handler(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<SupportRequest>, JsonRejection>,
) -> ApiResult<Json<SupportReply>> {
    let Json(request) = payload.map_err(ApiError::from)?;

    let Some(raw_input) = request.message.as_str() else {
        debug!("Rejecting non-string message: {}", request.message);
        return Err(PipelineError::EmptyInput.into());
    };

    let reply = app_state.pipeline.handle(raw_input).await?;
    Ok(Json(reply))
}
