//! API routes.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::{create_video, get_video, health, ready, upload_thumbnail, upload_video};
use crate::middleware::{cors_layer, request_logging};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let video_routes = Router::new()
        .route("/videos", post(create_video))
        .route("/videos/:video_id", get(get_video))
        .route("/videos/:video_id/upload", post(upload_video))
        .route("/videos/:video_id/thumbnail", post(upload_thumbnail));

    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .merge(video_routes)
        .layer(axum::middleware::from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        // Uploads carry whole video files; both limits are sized for that.
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .layer(RequestBodyLimitLayer::new(state.config.max_upload_bytes))
        .with_state(state)
}
