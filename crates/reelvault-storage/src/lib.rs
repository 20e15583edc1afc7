//! S3-compatible object storage for published media.
//!
//! This crate provides:
//! - An `ObjectStore` trait over upload/delete plus public URL building
//! - A production client backed by `aws-sdk-s3`
//! - Unguessable storage-key derivation with aspect/thumbnail prefixes

pub mod client;
pub mod error;
pub mod key;

pub use client::{ObjectStore, S3ObjectStore, StorageConfig};
pub use error::{StorageError, StorageResult};
pub use key::{derive_media_key, derive_thumbnail_key, KEY_RANDOM_BYTES, THUMBNAIL_PREFIX};
