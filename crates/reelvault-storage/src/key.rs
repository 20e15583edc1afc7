//! Storage key derivation.
//!
//! Keys are never derived from user-controlled filenames: every key is
//! 32 bytes from the OS random source, URL-safe encoded, under a path
//! prefix chosen by the caller's classification.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::rngs::OsRng;
use rand::TryRngCore;

use reelvault_models::{AspectClass, MediaType};

use crate::error::{StorageError, StorageResult};

/// Number of random bytes drawn per key.
pub const KEY_RANDOM_BYTES: usize = 32;

/// Path prefix for thumbnail objects.
pub const THUMBNAIL_PREFIX: &str = "thumbnails";

/// Derive the storage key for a published video:
/// `{landscape|portrait|other}/{random}.{subtype}`.
pub fn derive_media_key(class: AspectClass, media_type: &MediaType) -> StorageResult<String> {
    prefixed_key(class.prefix(), media_type)
}

/// Derive the storage key for a thumbnail:
/// `thumbnails/{random}.{subtype}`.
pub fn derive_thumbnail_key(media_type: &MediaType) -> StorageResult<String> {
    prefixed_key(THUMBNAIL_PREFIX, media_type)
}

fn prefixed_key(prefix: &str, media_type: &MediaType) -> StorageResult<String> {
    let extension = media_type
        .subtype()
        .ok_or_else(|| StorageError::InvalidContentType(media_type.essence().to_string()))?;

    let mut raw = [0u8; KEY_RANDOM_BYTES];
    OsRng
        .try_fill_bytes(&mut raw)
        .map_err(|e| StorageError::RandomSource(e.to_string()))?;

    Ok(format!(
        "{}/{}.{}",
        prefix,
        URL_SAFE_NO_PAD.encode(raw),
        extension
    ))
}
