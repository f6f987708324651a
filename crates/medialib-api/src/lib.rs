//! Medialib API Library
//!
//! HTTP handlers for uploading and listing media, and the application setup
//! that wires them to the storage connector.

mod handlers;
mod utils;

pub mod error;
pub mod setup;
pub mod state;

pub use error::HttpAppError;
pub use handlers::upload::{UploadResponse, UPLOAD_SUCCESS_MESSAGE};
pub use state::AppState;
pub use utils::multipart::decode_upload;
