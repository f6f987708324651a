//! Multipart decoder for media uploads
//!
//! Buffers the whole request in memory and sorts its parts into the `image` and `song`
//! file slots plus the descriptive text fields. A part counts as a file only when it
//! carries a non-empty filename; an empty file input (`filename=""`) is treated as
//! absent.

use axum::extract::multipart::{Field, MultipartError};
use axum::extract::Multipart;
use axum::http::StatusCode;
use medialib_core::models::{DecodedUpload, FilePart};
use medialib_core::AppError;

pub const IMAGE_FIELD: &str = "image";
pub const SONG_FIELD: &str = "song";

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

fn decode_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::Decode(err.body_text())
    }
}

async fn read_file(field: Field<'_>) -> Result<FilePart, AppError> {
    let filename = field.file_name().unwrap_or_default().to_string();
    let content_type = field
        .content_type()
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_string();
    let data = field.bytes().await.map_err(decode_error)?;
    Ok(FilePart {
        filename,
        content_type,
        data,
    })
}

/// Decode an upload request into its file parts and text fields.
///
/// Repeated `image`/`song` files keep the first one. File parts under any other name
/// are rejected. Unknown text fields are ignored; a repeated text field keeps the last
/// value.
pub async fn decode_upload(mut multipart: Multipart) -> Result<DecodedUpload, AppError> {
    let mut upload = DecodedUpload::default();

    while let Some(field) = multipart.next_field().await.map_err(decode_error)? {
        let name = field.name().unwrap_or_default().to_string();

        if let Some(has_filename) = field.file_name().map(|f| !f.is_empty()) {
            if !has_filename {
                tracing::debug!(field = %name, "Skipping file part without a filename");
                field.bytes().await.map_err(decode_error)?;
                continue;
            }
            let slot = match name.as_str() {
                IMAGE_FIELD => &mut upload.image,
                SONG_FIELD => &mut upload.song,
                _ => {
                    return Err(AppError::Decode(format!(
                        "unexpected file field '{}'",
                        name
                    )))
                }
            };
            let part = read_file(field).await?;
            if slot.is_none() {
                *slot = Some(part);
            } else {
                tracing::debug!(field = %name, "Ignoring repeated file part");
            }
            continue;
        }

        let target = match name.as_str() {
            "title" => &mut upload.fields.title,
            "description" => &mut upload.fields.description,
            "artist" => &mut upload.fields.artist,
            "album" => &mut upload.fields.album,
            _ => {
                // Drain so the stream can advance past it.
                field.bytes().await.map_err(decode_error)?;
                continue;
            }
        };
        *target = Some(field.text().await.map_err(decode_error)?);
    }

    tracing::debug!(
        has_image = upload.image.is_some(),
        has_song = upload.song.is_some(),
        image_bytes = upload.image.as_ref().map(|p| p.data.len()).unwrap_or(0),
        song_bytes = upload.song.as_ref().map(|p| p.data.len()).unwrap_or(0),
        "Decoded multipart upload"
    );

    Ok(upload)
}
