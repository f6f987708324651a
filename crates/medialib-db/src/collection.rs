//! Media collection abstraction
//!
//! The upload and listing handlers only need two operations from the store: insert one
//! document atomically and read every document back. Both the Postgres repository and
//! the in-memory collection implement this trait.

use async_trait::async_trait;
use medialib_core::models::{MediaDocument, MediaRecord};
use medialib_core::AppError;
use uuid::Uuid;

#[async_trait]
pub trait MediaCollection: Send + Sync {
    /// Insert one document and return the identifier the store assigned to it.
    ///
    /// The insert either fully succeeds or leaves nothing behind.
    async fn insert_one(&self, document: &MediaDocument) -> Result<Uuid, AppError>;

    /// Return every record in the store's natural order, unfiltered.
    async fn find_all(&self) -> Result<Vec<MediaRecord>, AppError>;

    /// Cheap round-trip used by readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}
