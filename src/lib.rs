// src/lib.rs

pub mod api;
pub mod classifier;
pub mod config;
pub mod generator;
pub mod llm;
pub mod pipeline;
pub mod state;
pub mod text;
