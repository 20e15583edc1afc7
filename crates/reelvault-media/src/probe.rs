//! FFprobe stream geometry probing.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;
use tracing::debug;

use crate::error::{MediaError, MediaResult};

/// Pixel dimensions of a probed stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamGeometry {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// FFprobe JSON output format.
#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    streams: Vec<FfprobeStream>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    width: Option<u32>,
    height: Option<u32>,
}

/// Probes a local media file for stream geometry.
#[async_trait]
pub trait MediaProber: Send + Sync {
    /// Probe the file at `path` and return the first stream's geometry.
    async fn probe(&self, path: &Path) -> MediaResult<StreamGeometry>;
}

/// Production prober that shells out to `ffprobe`.
#[derive(Debug, Default, Clone)]
pub struct FfprobeProber;

#[async_trait]
impl MediaProber for FfprobeProber {
    async fn probe(&self, path: &Path) -> MediaResult<StreamGeometry> {
        which::which("ffprobe").map_err(|_| MediaError::FfprobeNotFound)?;

        debug!("Probing {}", path.display());

        let output = Command::new("ffprobe")
            .args(["-v", "error", "-print_format", "json", "-show_streams"])
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| MediaError::ffprobe_failed(format!("failed to run ffprobe: {e}"), None))?;

        if !output.status.success() {
            return Err(MediaError::ffprobe_failed(
                format!(
                    "ffprobe exited with status {}",
                    output.status.code().unwrap_or(-1)
                ),
                Some(String::from_utf8_lossy(&output.stderr).to_string()),
            ));
        }

        parse_probe_output(&output.stdout)
    }
}

/// Parse ffprobe's JSON document into stream geometry.
///
/// Only the first stream is consulted; absent dimensions default to
/// zero, which downstream classification buckets as `Other`.
fn parse_probe_output(bytes: &[u8]) -> MediaResult<StreamGeometry> {
    let probe: FfprobeOutput = serde_json::from_slice(bytes)?;

    let stream = probe.streams.first().ok_or(MediaError::NoStreams)?;

    Ok(StreamGeometry {
        width: stream.width.unwrap_or(0),
        height: stream.height.unwrap_or(0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_probe_output() {
        let json = br#"{"streams":[{"codec_type":"video","width":1920,"height":1080},{"codec_type":"audio"}]}"#;
        let geometry = parse_probe_output(json).unwrap();
        assert_eq!(
            geometry,
            StreamGeometry {
                width: 1920,
                height: 1080
            }
        );
    }

    #[test]
    fn test_parse_first_stream_without_dimensions() {
        // An audio-first file reports no width/height on stream 0.
        let json = br#"{"streams":[{"codec_type":"audio"}]}"#;
        let geometry = parse_probe_output(json).unwrap();
        assert_eq!(geometry, StreamGeometry { width: 0, height: 0 });
    }

    #[test]
    fn test_parse_zero_streams() {
        let json = br#"{"streams":[]}"#;
        assert!(matches!(
            parse_probe_output(json),
            Err(MediaError::NoStreams)
        ));

        let json = br#"{}"#;
        assert!(matches!(
            parse_probe_output(json),
            Err(MediaError::NoStreams)
        ));
    }

    #[test]
    fn test_parse_malformed_json() {
        assert!(matches!(
            parse_probe_output(b"not json"),
            Err(MediaError::JsonParse(_))
        ));
    }
}
