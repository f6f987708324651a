use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::payload::BinaryPayload;
use super::upload::{DecodedUpload, FilePart};
use crate::error::AppError;

/// Embedded image sub-document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAsset {
    pub filename: String,
    pub content_type: String,
    pub data: BinaryPayload,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Embedded song sub-document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongAsset {
    pub filename: String,
    pub content_type: String,
    pub data: BinaryPayload,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
}

/// A media document ready to be inserted. It has no identifier until the store assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub uploaded_at: DateTime<Utc>,
    pub image: ImageAsset,
    pub song: SongAsset,
}

/// A persisted media document together with its store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRecord {
    pub id: Uuid,
    #[serde(flatten)]
    pub document: MediaDocument,
}

impl MediaDocument {
    /// Build a document from a decoded upload, stamped with the current server time.
    ///
    /// Fails with `AppError::MissingPart` when the image or the song is absent; that is
    /// the only check performed. Missing text fields are carried as `None`.
    pub fn from_upload(upload: DecodedUpload) -> Result<Self, AppError> {
        Self::from_upload_at(upload, Utc::now())
    }

    pub fn from_upload_at(
        upload: DecodedUpload,
        uploaded_at: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        let DecodedUpload {
            image,
            song,
            fields,
        } = upload;

        let (image, song) = match (image, song) {
            (Some(image), Some(song)) => (image, song),
            (None, Some(_)) => return Err(AppError::MissingPart("image".to_string())),
            (Some(_), None) => return Err(AppError::MissingPart("song".to_string())),
            (None, None) => return Err(AppError::MissingPart("image, song".to_string())),
        };

        let FilePart {
            filename,
            content_type,
            data,
        } = image;
        let image = ImageAsset {
            filename,
            content_type,
            data: BinaryPayload::from(data),
            description: fields.description,
        };

        let FilePart {
            filename,
            content_type,
            data,
        } = song;
        let song = SongAsset {
            filename,
            content_type,
            data: BinaryPayload::from(data),
            artist: fields.artist,
            album: fields.album,
        };

        Ok(MediaDocument {
            title: fields.title,
            uploaded_at,
            image,
            song,
        })
    }
}

impl MediaRecord {
    pub fn new(id: Uuid, document: MediaDocument) -> Self {
        Self { id, document }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::upload::UploadFields;
    use chrono::TimeZone;

    fn image_part() -> FilePart {
        FilePart::new("img1.jpg", "image/jpeg", vec![0xFF, 0xD8, 0xFF, 0xE0])
    }

    fn song_part() -> FilePart {
        FilePart::new("track1.mp3", "audio/mpeg", b"ID3\x03\x00".to_vec())
    }

    fn sunset_fields() -> UploadFields {
        UploadFields {
            title: Some("Sunset".to_string()),
            description: Some("beach photo".to_string()),
            artist: Some("Jane".to_string()),
            album: Some("Demo".to_string()),
        }
    }

    #[test]
    fn test_build_maps_parts_and_fields() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let doc = MediaDocument::from_upload_at(
            DecodedUpload {
                image: Some(image_part()),
                song: Some(song_part()),
                fields: sunset_fields(),
            },
            at,
        )
        .unwrap();

        assert_eq!(doc.title.as_deref(), Some("Sunset"));
        assert_eq!(doc.uploaded_at, at);
        assert_eq!(doc.image.filename, "img1.jpg");
        assert_eq!(doc.image.content_type, "image/jpeg");
        assert_eq!(doc.image.data.as_bytes(), &[0xFF, 0xD8, 0xFF, 0xE0]);
        assert_eq!(doc.image.description.as_deref(), Some("beach photo"));
        assert_eq!(doc.song.filename, "track1.mp3");
        assert_eq!(doc.song.artist.as_deref(), Some("Jane"));
        assert_eq!(doc.song.album.as_deref(), Some("Demo"));
    }

    #[test]
    fn test_build_stamps_current_time() {
        let before = Utc::now();
        let doc = MediaDocument::from_upload(DecodedUpload {
            image: Some(image_part()),
            song: Some(song_part()),
            fields: UploadFields::default(),
        })
        .unwrap();
        assert!(doc.uploaded_at >= before);
        assert!(doc.uploaded_at <= Utc::now());
    }

    #[test]
    fn test_missing_song_is_rejected() {
        let err = MediaDocument::from_upload(DecodedUpload {
            image: Some(image_part()),
            song: None,
            fields: sunset_fields(),
        })
        .unwrap_err();
        assert!(matches!(err, AppError::MissingPart(ref p) if p == "song"));
    }

    #[test]
    fn test_missing_image_is_rejected() {
        let err = MediaDocument::from_upload(DecodedUpload {
            image: None,
            song: Some(song_part()),
            fields: sunset_fields(),
        })
        .unwrap_err();
        assert!(matches!(err, AppError::MissingPart(ref p) if p == "image"));
    }

    #[test]
    fn test_missing_both_is_rejected() {
        let err = MediaDocument::from_upload(DecodedUpload::default()).unwrap_err();
        assert!(matches!(err, AppError::MissingPart(_)));
    }

    #[test]
    fn test_absent_text_fields_are_accepted_and_omitted() {
        let doc = MediaDocument::from_upload(DecodedUpload {
            image: Some(image_part()),
            song: Some(song_part()),
            fields: UploadFields::default(),
        })
        .unwrap();
        assert!(doc.title.is_none());

        let json = serde_json::to_value(&doc).unwrap();
        assert!(json.get("title").is_none());
        assert!(json["image"].get("description").is_none());
        assert!(json["song"].get("artist").is_none());
    }

    #[test]
    fn test_record_json_shape() {
        let doc = MediaDocument::from_upload(DecodedUpload {
            image: Some(image_part()),
            song: Some(song_part()),
            fields: sunset_fields(),
        })
        .unwrap();
        let id = Uuid::new_v4();
        let json = serde_json::to_value(MediaRecord::new(id, doc)).unwrap();

        assert_eq!(json["id"], serde_json::json!(id.to_string()));
        assert_eq!(json["title"], "Sunset");
        assert!(json["uploadedAt"].is_string());
        assert_eq!(json["image"]["contentType"], "image/jpeg");
        assert_eq!(json["image"]["data"], "/9j/4A==");
        assert_eq!(json["song"]["data"], "SUQzAwA=");
        assert_eq!(json["song"]["album"], "Demo");

        let back: MediaRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back.id, id);
        assert_eq!(back.document.image.data.as_bytes(), &[0xFF, 0xD8, 0xFF, 0xE0]);
    }
}
