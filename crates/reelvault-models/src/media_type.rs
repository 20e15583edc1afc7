//! Declared media (content) type parsing.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The only video media type accepted for upload.
pub const VIDEO_MP4: &str = "video/mp4";

/// Video media types accepted by the upload endpoint.
pub const ALLOWED_VIDEO_TYPES: &[&str] = &[VIDEO_MP4];

/// Image media types accepted by the thumbnail endpoint.
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png"];

/// Error parsing a declared media type.
#[derive(Debug, Error)]
pub enum MediaTypeError {
    #[error("empty content type")]
    Empty,
}

/// A parsed media type, reduced to its `type/subtype` essence.
///
/// Parameters (`; boundary=...`, `; codecs=...`) are stripped and the
/// essence is lowercased. A bare type without a subtype parses fine,
/// mirroring what permissive HTTP clients send; consumers that need a
/// subtype check [`MediaType::subtype`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaType {
    essence: String,
}

impl MediaType {
    /// Parse a raw `Content-Type` header value.
    pub fn parse(raw: &str) -> Result<Self, MediaTypeError> {
        let essence = raw
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        if essence.is_empty() {
            return Err(MediaTypeError::Empty);
        }
        Ok(Self { essence })
    }

    /// The `type/subtype` essence, lowercased, without parameters.
    pub fn essence(&self) -> &str {
        &self.essence
    }

    /// The subtype portion (text after `/`), if present and non-empty.
    pub fn subtype(&self) -> Option<&str> {
        self.essence
            .split_once('/')
            .map(|(_, sub)| sub)
            .filter(|sub| !sub.is_empty())
    }

    /// Whether this is an accepted video upload type.
    pub fn is_allowed_video(&self) -> bool {
        ALLOWED_VIDEO_TYPES.contains(&self.essence.as_str())
    }

    /// Whether this is an accepted thumbnail image type.
    pub fn is_allowed_image(&self) -> bool {
        ALLOWED_IMAGE_TYPES.contains(&self.essence.as_str())
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.essence)
    }
}
