//! Medialib storage layer
//!
//! The media collection trait, its Postgres repository, and the connector that owns
//! the connection lifecycle and exposes the collection once it is ready.

pub mod collection;
pub mod connector;
pub mod media;
#[cfg(any(test, feature = "test-helpers"))]
pub mod memory;

pub use collection::MediaCollection;
pub use connector::{ConnectionState, StorageConnector};
pub use media::{MediaRepository, MediaRow};
#[cfg(any(test, feature = "test-helpers"))]
pub use memory::InMemoryMediaCollection;
