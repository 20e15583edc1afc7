//! S3-compatible object store client.

use std::path::Path;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_sdk_s3::config::{Builder, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use tracing::{debug, info};

use crate::error::{StorageError, StorageResult};

/// Configuration for the object store client.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Custom S3 endpoint URL (MinIO, R2, ...); empty for real AWS
    pub endpoint_url: Option<String>,
    /// Region
    pub region: String,
    /// Access key ID
    pub access_key_id: String,
    /// Secret access key
    pub secret_access_key: String,
    /// Bucket name
    pub bucket: String,
    /// CDN distribution base URL used to build public object URLs
    pub distribution_url: String,
}

impl StorageConfig {
    /// Create config from environment variables.
    pub fn from_env() -> StorageResult<Self> {
        Ok(Self {
            endpoint_url: std::env::var("S3_ENDPOINT_URL").ok(),
            region: std::env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            access_key_id: std::env::var("S3_ACCESS_KEY_ID")
                .map_err(|_| StorageError::config_error("S3_ACCESS_KEY_ID not set"))?,
            secret_access_key: std::env::var("S3_SECRET_ACCESS_KEY")
                .map_err(|_| StorageError::config_error("S3_SECRET_ACCESS_KEY not set"))?,
            bucket: std::env::var("S3_BUCKET")
                .map_err(|_| StorageError::config_error("S3_BUCKET not set"))?,
            distribution_url: std::env::var("CDN_DISTRIBUTION_URL")
                .map_err(|_| StorageError::config_error("CDN_DISTRIBUTION_URL not set"))?,
        })
    }
}

/// Durable object storage for published media.
///
/// Uploads are idempotent by key: a second put to the same key replaces
/// the object. A failed upload leaves the object absent or undefined —
/// callers must not rely on partial content.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Upload a local file's bytes under `key`, tagging `content_type`.
    async fn upload_file(&self, path: &Path, key: &str, content_type: &str) -> StorageResult<()>;

    /// Upload an in-memory buffer under `key`, tagging `content_type`.
    async fn upload_bytes(&self, data: Vec<u8>, key: &str, content_type: &str)
        -> StorageResult<()>;

    /// Delete the object at `key`.
    async fn delete_object(&self, key: &str) -> StorageResult<()>;

    /// Public URL for the object at `key`, served via the CDN.
    fn public_url(&self, key: &str) -> String;
}

/// Object store client backed by `aws-sdk-s3`.
#[derive(Clone)]
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
    distribution_url: String,
}

impl S3ObjectStore {
    /// Create a new client from configuration.
    pub fn new(config: StorageConfig) -> Self {
        let credentials = Credentials::new(
            &config.access_key_id,
            &config.secret_access_key,
            None,
            None,
            "reelvault",
        );

        let mut builder = Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region))
            .credentials_provider(credentials);

        if let Some(endpoint) = &config.endpoint_url {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        let client = Client::from_conf(builder.build());

        Self {
            client,
            bucket: config.bucket,
            distribution_url: config.distribution_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create from environment variables.
    pub fn from_env() -> StorageResult<Self> {
        Ok(Self::new(StorageConfig::from_env()?))
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn upload_file(&self, path: &Path, key: &str, content_type: &str) -> StorageResult<()> {
        debug!("Uploading {} to {}", path.display(), key);

        let body = ByteStream::from_path(path)
            .await
            .map_err(|e| StorageError::upload_failed(e.to_string()))?;

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(body)
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| StorageError::upload_failed(e.to_string()))?;

        info!("Uploaded {} to {}", path.display(), key);
        Ok(())
    }

    async fn upload_bytes(
        &self,
        data: Vec<u8>,
        key: &str,
        content_type: &str,
    ) -> StorageResult<()> {
        debug!("Uploading {} bytes to {}", data.len(), key);

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(data))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| StorageError::upload_failed(e.to_string()))?;

        Ok(())
    }

    async fn delete_object(&self, key: &str) -> StorageResult<()> {
        debug!("Deleting {}", key);

        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::delete_failed(e.to_string()))?;

        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.distribution_url, key)
    }
}
