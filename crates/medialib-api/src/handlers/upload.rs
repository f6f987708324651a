use crate::error::HttpAppError;
use crate::state::AppState;
use crate::utils::multipart::decode_upload;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use medialib_core::models::MediaDocument;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

pub const UPLOAD_SUCCESS_MESSAGE: &str = "Files uploaded successfully";

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub id: Uuid,
}

/// Accept an image and a song with their metadata and store them as one record.
///
/// Decode, build and insert run in that order; the first failure ends the request.
/// Nothing is written unless the insert itself succeeds.
#[tracing::instrument(
    skip(state, multipart),
    fields(operation = "upload_media", media_id = tracing::field::Empty)
)]
pub async fn upload_media(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let upload = decode_upload(multipart).await?;
    let document = MediaDocument::from_upload(upload)?;

    let collection = state.store.collection()?;
    let id = collection.insert_one(&document).await?;

    tracing::Span::current().record("media_id", tracing::field::display(id));
    tracing::info!(
        media_id = %id,
        image = %document.image.filename,
        song = %document.song.filename,
        "Inserted media document"
    );

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            message: UPLOAD_SUCCESS_MESSAGE.to_string(),
            id,
        }),
    ))
}
