// src/state.rs
// Shared, read-only state handed to every request

use std::sync::Arc;

use crate::pipeline::SupportPipeline;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: SupportPipeline,
}

impl AppState {
    pub fn new(pipeline: SupportPipeline) -> Arc<Self> {
        Arc::new(Self { pipeline })
    }
}
