//! Upload orchestration.
//!
//! One staged file goes in; a published object comes out. The staged
//! file and the remuxed copy are removed on every exit path — success,
//! failure at any step, or a dropped request future — via drop-based
//! guards, never manual bookkeeping.

use std::sync::Arc;

use tempfile::TempPath;
use tracing::{debug, info, warn};

use reelvault_media::{MediaProber, MediaRemuxer};
use reelvault_models::{AspectClass, MediaType};
use reelvault_storage::{derive_media_key, derive_thumbnail_key, ObjectStore};

use crate::error::ApiResult;
use crate::retry::{retry_async, RetryConfig, RetryResult};

/// A media object made durable in the object store.
#[derive(Debug, Clone)]
pub struct PublishedMedia {
    /// Storage key within the bucket
    pub key: String,
    /// Public CDN URL
    pub url: String,
}

/// Orchestrates probe → classify → derive key → remux → upload.
pub struct IngestPipeline {
    prober: Arc<dyn MediaProber>,
    remuxer: Arc<dyn MediaRemuxer>,
    objects: Arc<dyn ObjectStore>,
    upload_retry: RetryConfig,
}

impl IngestPipeline {
    pub fn new(
        prober: Arc<dyn MediaProber>,
        remuxer: Arc<dyn MediaRemuxer>,
        objects: Arc<dyn ObjectStore>,
    ) -> Self {
        Self {
            prober,
            remuxer,
            objects,
            upload_retry: RetryConfig::new("object_upload"),
        }
    }

    /// Override the upload retry policy.
    pub fn with_upload_retry(mut self, upload_retry: RetryConfig) -> Self {
        self.upload_retry = upload_retry;
        self
    }

    /// Publish a staged video upload.
    ///
    /// Takes ownership of the staged file; it is deleted when this
    /// function returns, whatever the outcome. The remuxed copy is
    /// likewise deleted once the upload has succeeded or failed.
    pub async fn publish_video(
        &self,
        staged: TempPath,
        media_type: &MediaType,
    ) -> ApiResult<PublishedMedia> {
        let geometry = self.prober.probe(&staged).await?;
        let class = AspectClass::classify(geometry.width, geometry.height);
        debug!(
            width = geometry.width,
            height = geometry.height,
            class = %class,
            "classified upload"
        );

        let key = derive_media_key(class, media_type)?;

        let remuxed = self.remuxer.remux_fast_start(&staged).await?;
        let remuxed = scopeguard::guard(remuxed, |path| {
            if let Err(e) = std::fs::remove_file(&path) {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!("Failed to remove remuxed file {}: {}", path.display(), e);
                }
            }
        });

        match retry_async(&self.upload_retry, || {
            self.objects.upload_file(&remuxed, &key, media_type.essence())
        })
        .await
        {
            RetryResult::Success(()) => {}
            RetryResult::Failed { error, attempts } => {
                warn!(key = %key, attempts, "upload failed after retries");
                return Err(error.into());
            }
        }

        let url = self.objects.public_url(&key);
        info!(key = %key, url = %url, "published video");

        Ok(PublishedMedia { key, url })
    }

    /// Publish a thumbnail image.
    pub async fn publish_thumbnail(
        &self,
        data: Vec<u8>,
        media_type: &MediaType,
    ) -> ApiResult<PublishedMedia> {
        let key = derive_thumbnail_key(media_type)?;

        match retry_async(&self.upload_retry, || {
            self.objects
                .upload_bytes(data.clone(), &key, media_type.essence())
        })
        .await
        {
            RetryResult::Success(()) => {}
            RetryResult::Failed { error, attempts } => {
                warn!(key = %key, attempts, "thumbnail upload failed after retries");
                return Err(error.into());
            }
        }

        let url = self.objects.public_url(&key);
        info!(key = %key, "published thumbnail");

        Ok(PublishedMedia { key, url })
    }

    /// Best-effort removal of an object whose URL could not be
    /// persisted, so a failed metadata write does not leave an orphan.
    pub async fn discard(&self, key: &str) {
        if let Err(e) = self.objects.delete_object(key).await {
            warn!(key = %key, "failed to delete orphaned object: {}", e);
        }
    }
}
