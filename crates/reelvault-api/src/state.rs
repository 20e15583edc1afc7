//! Application state.

use std::sync::Arc;

use reelvault_db::{MemoryVideoStore, VideoStore};
use reelvault_media::{FfmpegRemuxer, FfprobeProber, MediaProber, MediaRemuxer};
use reelvault_storage::{ObjectStore, S3ObjectStore};

use crate::config::ApiConfig;
use crate::services::IngestPipeline;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub videos: Arc<dyn VideoStore>,
    pub ingest: Arc<IngestPipeline>,
}

impl AppState {
    /// Create application state with the production collaborators.
    pub fn new(config: ApiConfig) -> anyhow::Result<Self> {
        let objects = Arc::new(S3ObjectStore::from_env()?);
        Ok(Self::with_collaborators(
            config,
            Arc::new(MemoryVideoStore::new()),
            Arc::new(FfprobeProber),
            Arc::new(FfmpegRemuxer),
            objects,
        ))
    }

    /// Create application state with explicit collaborators.
    ///
    /// Tests use this to swap the prober/remuxer/object store for fakes.
    pub fn with_collaborators(
        config: ApiConfig,
        videos: Arc<dyn VideoStore>,
        prober: Arc<dyn MediaProber>,
        remuxer: Arc<dyn MediaRemuxer>,
        objects: Arc<dyn ObjectStore>,
    ) -> Self {
        let ingest = Arc::new(IngestPipeline::new(prober, remuxer, objects));
        Self {
            config,
            videos,
            ingest,
        }
    }
}
