//! Shared data models for the ReelVault backend.
//!
//! This crate provides Serde-serializable types for:
//! - Video records and their identifiers
//! - Aspect-ratio classification
//! - Media (content) type parsing and allow lists

pub mod aspect;
pub mod media_type;
pub mod video;

// Re-export common types
pub use aspect::AspectClass;
pub use media_type::{MediaType, MediaTypeError, ALLOWED_IMAGE_TYPES, ALLOWED_VIDEO_TYPES, VIDEO_MP4};
pub use video::{UserId, VideoId, VideoRecord};
