//! FFmpeg/FFprobe CLI adapters for the upload pipeline.
//!
//! This crate provides:
//! - Stream geometry probing via `ffprobe`
//! - Fast-start remuxing (stream copy, no re-encode) via `ffmpeg`
//!
//! Both tools are wrapped behind narrow async traits so the rest of the
//! pipeline can be exercised with fake implementations.

pub mod error;
pub mod faststart;
pub mod probe;

pub use error::{MediaError, MediaResult};
pub use faststart::{fast_start_output_path, FfmpegRemuxer, MediaRemuxer, FAST_START_SUFFIX};
pub use probe::{FfprobeProber, MediaProber, StreamGeometry};
