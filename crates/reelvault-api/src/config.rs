//! API configuration.

use std::path::PathBuf;

use anyhow::Context;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// CORS origins
    pub cors_origins: Vec<String>,
    /// Max request body size (sized for full video uploads)
    pub max_upload_bytes: usize,
    /// Directory for staging uploaded files
    pub spool_dir: PathBuf,
    /// Secret for verifying bearer JWTs
    pub jwt_secret: String,
    /// Environment (development/production)
    pub environment: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_origins: vec!["*".to_string()],
            max_upload_bytes: 1 << 30, // 1 GiB
            spool_dir: std::env::temp_dir(),
            jwt_secret: "insecure-dev-secret".to_string(),
            environment: "development".to_string(),
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables.
    ///
    /// `JWT_SECRET` is required; everything else falls back to the
    /// defaults above.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("API_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(|_| vec!["*".to_string()]),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1 << 30),
            spool_dir: std::env::var("SPOOL_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| std::env::temp_dir()),
            jwt_secret: std::env::var("JWT_SECRET").context("JWT_SECRET not set")?,
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        })
    }

    /// Check if running in production mode.
    pub fn is_production(&self) -> bool {
        self.environment.to_lowercase() == "production"
    }
}
