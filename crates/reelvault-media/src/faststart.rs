//! Fast-start remuxing via FFmpeg stream copy.
//!
//! Rewrites an MP4 so that playback-control metadata precedes the media
//! data, letting playback begin before the full file has downloaded.
//! Samples are copied, never re-encoded.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::{MediaError, MediaResult};

/// Suffix appended to the input path to form the remux output path.
pub const FAST_START_SUFFIX: &str = ".processing";

/// Sibling output path for a fast-start remux of `input`.
pub fn fast_start_output_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(FAST_START_SUFFIX);
    PathBuf::from(name)
}

/// Remuxes a local media file into a progressive-playback layout.
///
/// On success the returned path is owned by the caller, which is
/// responsible for using and deleting it. On failure no output file is
/// left behind.
#[async_trait]
pub trait MediaRemuxer: Send + Sync {
    async fn remux_fast_start(&self, input: &Path) -> MediaResult<PathBuf>;
}

/// Production remuxer that shells out to `ffmpeg`.
#[derive(Debug, Default, Clone)]
pub struct FfmpegRemuxer;

#[async_trait]
impl MediaRemuxer for FfmpegRemuxer {
    async fn remux_fast_start(&self, input: &Path) -> MediaResult<PathBuf> {
        which::which("ffmpeg").map_err(|_| MediaError::FfmpegNotFound)?;

        let output_path = fast_start_output_path(input);
        debug!(
            "Remuxing {} -> {}",
            input.display(),
            output_path.display()
        );

        let output = Command::new("ffmpeg")
            .arg("-y")
            .args(["-v", "error"])
            .arg("-i")
            .arg(input)
            .args(["-c", "copy", "-movflags", "faststart", "-f", "mp4"])
            .arg(&output_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                MediaError::ffmpeg_failed(format!("failed to run ffmpeg: {e}"), None, None)
            })?;

        if !output.status.success() {
            // A failed remux must not leave a partial output behind.
            if let Err(e) = tokio::fs::remove_file(&output_path).await {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!(
                        "Failed to remove partial remux output {}: {}",
                        output_path.display(),
                        e
                    );
                }
            }
            return Err(MediaError::ffmpeg_failed(
                "ffmpeg exited with non-zero status",
                Some(String::from_utf8_lossy(&output.stderr).to_string()),
                output.status.code(),
            ));
        }

        Ok(output_path)
    }
}
