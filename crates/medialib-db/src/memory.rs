//! In-memory media collection for tests and database-free setups.

use async_trait::async_trait;
use medialib_core::models::{MediaDocument, MediaRecord};
use medialib_core::AppError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::collection::MediaCollection;

/// Keeps records in insertion order. Clones share the same backing store.
#[derive(Clone, Default)]
pub struct InMemoryMediaCollection {
    records: Arc<RwLock<Vec<MediaRecord>>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryMediaCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail with a storage error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::StorageUnavailable(
                "in-memory collection set to fail".to_string(),
            ));
        }
        Ok(())
    }

    fn poisoned() -> AppError {
        AppError::Internal("media collection lock poisoned".to_string())
    }
}

#[async_trait]
impl MediaCollection for InMemoryMediaCollection {
    async fn insert_one(&self, document: &MediaDocument) -> Result<Uuid, AppError> {
        self.check_available()?;
        let id = Uuid::new_v4();
        self.records
            .write()
            .map_err(|_| Self::poisoned())?
            .push(MediaRecord::new(id, document.clone()));
        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<MediaRecord>, AppError> {
        self.check_available()?;
        Ok(self.records.read().map_err(|_| Self::poisoned())?.clone())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_available()
    }
}
