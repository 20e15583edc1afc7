//! Video store trait and the in-process implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use reelvault_models::{VideoId, VideoRecord};

use crate::error::{StoreError, StoreResult};

/// Metadata store for video records.
#[async_trait]
pub trait VideoStore: Send + Sync {
    /// Fetch a record by ID. `None` if no such record exists.
    async fn get_video(&self, id: &VideoId) -> StoreResult<Option<VideoRecord>>;

    /// Insert a new record. Fails if the ID is already taken.
    async fn create_video(&self, record: &VideoRecord) -> StoreResult<()>;

    /// Replace an existing record. Fails if the record does not exist.
    async fn update_video(&self, record: &VideoRecord) -> StoreResult<()>;
}

/// In-process video store backed by a map.
#[derive(Debug, Default)]
pub struct MemoryVideoStore {
    records: RwLock<HashMap<VideoId, VideoRecord>>,
}

impl MemoryVideoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VideoStore for MemoryVideoStore {
    async fn get_video(&self, id: &VideoId) -> StoreResult<Option<VideoRecord>> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }

    async fn create_video(&self, record: &VideoRecord) -> StoreResult<()> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.id) {
            return Err(StoreError::AlreadyExists(record.id));
        }
        records.insert(record.id, record.clone());
        Ok(())
    }

    async fn update_video(&self, record: &VideoRecord) -> StoreResult<()> {
        let mut records = self.records.write().await;
        match records.get_mut(&record.id) {
            Some(existing) => {
                *existing = record.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound(record.id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelvault_models::UserId;

    fn record() -> VideoRecord {
        VideoRecord::new(UserId::new(), "Test video", None)
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let store = MemoryVideoStore::new();
        let r = record();

        store.create_video(&r).await.unwrap();
        let fetched = store.get_video(&r.id).await.unwrap().unwrap();
        assert_eq!(fetched, r);
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let store = MemoryVideoStore::new();
        assert!(store.get_video(&VideoId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_duplicate_fails() {
        let store = MemoryVideoStore::new();
        let r = record();

        store.create_video(&r).await.unwrap();
        assert!(matches!(
            store.create_video(&r).await,
            Err(StoreError::AlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn test_update_persists_changes() {
        let store = MemoryVideoStore::new();
        let mut r = record();
        store.create_video(&r).await.unwrap();

        r.video_url = Some("https://cdn.example.com/landscape/abc.mp4".to_string());
        store.update_video(&r).await.unwrap();

        let fetched = store.get_video(&r.id).await.unwrap().unwrap();
        assert_eq!(
            fetched.video_url.as_deref(),
            Some("https://cdn.example.com/landscape/abc.mp4")
        );
    }

    #[tokio::test]
    async fn test_update_missing_fails() {
        let store = MemoryVideoStore::new();
        assert!(matches!(
            store.update_video(&record()).await,
            Err(StoreError::NotFound(_))
        ));
    }
}
