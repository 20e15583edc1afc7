//! Fake collaborators for pipeline and handler tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use reelvault_media::{
    fast_start_output_path, MediaError, MediaProber, MediaRemuxer, MediaResult, StreamGeometry,
};
use reelvault_storage::{ObjectStore, StorageError, StorageResult};

/// Prober returning canned geometry, or `NoStreams` when none is set.
pub struct FakeProber {
    geometry: Option<StreamGeometry>,
}

impl FakeProber {
    pub fn returning(width: u32, height: u32) -> Self {
        Self {
            geometry: Some(StreamGeometry { width, height }),
        }
    }

    pub fn no_streams() -> Self {
        Self { geometry: None }
    }
}

#[async_trait]
impl MediaProber for FakeProber {
    async fn probe(&self, path: &Path) -> MediaResult<StreamGeometry> {
        assert!(path.exists(), "prober should see the staged file");
        self.geometry.ok_or(MediaError::NoStreams)
    }
}

/// Remuxer that copies the input to the sibling output path, or fails
/// without producing one.
pub struct FakeRemuxer {
    fail: bool,
}

impl FakeRemuxer {
    pub fn ok() -> Self {
        Self { fail: false }
    }

    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl MediaRemuxer for FakeRemuxer {
    async fn remux_fast_start(&self, input: &Path) -> MediaResult<PathBuf> {
        if self.fail {
            return Err(MediaError::ffmpeg_failed(
                "ffmpeg exited with non-zero status",
                None,
                Some(1),
            ));
        }
        let output = fast_start_output_path(input);
        tokio::fs::copy(input, &output).await?;
        Ok(output)
    }
}

/// Object store that records uploads/deletes and can fail the first N
/// upload attempts.
#[derive(Default)]
pub struct RecordingObjectStore {
    uploads: Mutex<Vec<(String, String)>>,
    deletes: Mutex<Vec<String>>,
    fail_first: u32,
    calls: AtomicU32,
}

impl RecordingObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_first(n: u32) -> Self {
        Self {
            fail_first: n,
            ..Self::default()
        }
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    pub fn attempt_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn uploaded(&self) -> Vec<(String, String)> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deletes.lock().unwrap().clone()
    }

    fn record(&self, key: &str, content_type: &str) -> StorageResult<()> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.fail_first {
            return Err(StorageError::upload_failed("synthetic transport failure"));
        }
        self.uploads
            .lock()
            .unwrap()
            .push((key.to_string(), content_type.to_string()));
        Ok(())
    }
}

#[async_trait]
impl ObjectStore for RecordingObjectStore {
    async fn upload_file(&self, path: &Path, key: &str, content_type: &str) -> StorageResult<()> {
        assert!(path.exists(), "uploader should see the remuxed file");
        self.record(key, content_type)
    }

    async fn upload_bytes(
        &self,
        _data: Vec<u8>,
        key: &str,
        content_type: &str,
    ) -> StorageResult<()> {
        self.record(key, content_type)
    }

    async fn delete_object(&self, key: &str) -> StorageResult<()> {
        self.deletes.lock().unwrap().push(key.to_string());
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("https://cdn.test/{key}")
    }
}

/// Write a staged file and hand back its self-deleting path.
pub fn staged_file(dir: &Path) -> tempfile::TempPath {
    let file = tempfile::Builder::new()
        .prefix("reelvault-upload-")
        .suffix(".mp4")
        .tempfile_in(dir)
        .unwrap();
    std::fs::write(file.path(), b"fake mp4 bytes").unwrap();
    file.into_temp_path()
}
