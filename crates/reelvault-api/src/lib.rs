//! Axum HTTP API server.
//!
//! This crate provides:
//! - The upload orchestration pipeline (stage, probe, remux, upload)
//! - Bearer JWT verification
//! - Video record handlers and routing

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod retry;
pub mod routes;
pub mod services;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use services::{IngestPipeline, PublishedMedia};
pub use state::AppState;
