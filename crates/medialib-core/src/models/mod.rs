//! Domain models for the media library.

pub mod media;
pub mod payload;
pub mod upload;

pub use media::{ImageAsset, MediaDocument, MediaRecord, SongAsset};
pub use payload::BinaryPayload;
pub use upload::{DecodedUpload, FilePart, UploadFields};
