use async_trait::async_trait;
use chrono::{DateTime, Utc};
use medialib_core::models::{BinaryPayload, ImageAsset, MediaDocument, MediaRecord, SongAsset};
use medialib_core::AppError;
use sqlx::{FromRow, PgPool, Postgres};
use uuid::Uuid;

use crate::collection::MediaCollection;

const MEDIA_COLUMNS: &str = "id, title, uploaded_at, \
     image_filename, image_content_type, image_data, image_description, \
     song_filename, song_content_type, song_data, song_artist, song_album";

/// Flat row of the `media` table; sub-documents live in prefixed columns.
#[derive(Debug, FromRow)]
pub struct MediaRow {
    pub id: Uuid,
    pub title: Option<String>,
    pub uploaded_at: DateTime<Utc>,
    pub image_filename: String,
    pub image_content_type: String,
    pub image_data: Vec<u8>,
    pub image_description: Option<String>,
    pub song_filename: String,
    pub song_content_type: String,
    pub song_data: Vec<u8>,
    pub song_artist: Option<String>,
    pub song_album: Option<String>,
}

impl From<MediaRow> for MediaRecord {
    fn from(row: MediaRow) -> Self {
        MediaRecord::new(
            row.id,
            MediaDocument {
                title: row.title,
                uploaded_at: row.uploaded_at,
                image: ImageAsset {
                    filename: row.image_filename,
                    content_type: row.image_content_type,
                    data: BinaryPayload::from(row.image_data),
                    description: row.image_description,
                },
                song: SongAsset {
                    filename: row.song_filename,
                    content_type: row.song_content_type,
                    data: BinaryPayload::from(row.song_data),
                    artist: row.song_artist,
                    album: row.song_album,
                },
            },
        )
    }
}

/// Postgres-backed media collection
#[derive(Clone)]
pub struct MediaRepository {
    pool: PgPool,
}

impl MediaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MediaCollection for MediaRepository {
    #[tracing::instrument(
        skip(self, document),
        fields(
            db.table = "media",
            db.operation = "insert",
            image_bytes = document.image.data.len(),
            song_bytes = document.song.data.len()
        )
    )]
    async fn insert_one(&self, document: &MediaDocument) -> Result<Uuid, AppError> {
        let id = sqlx::query_scalar::<Postgres, Uuid>(
            r#"
            INSERT INTO media (
                title, uploaded_at,
                image_filename, image_content_type, image_data, image_description,
                song_filename, song_content_type, song_data, song_artist, song_album
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id
            "#,
        )
        .bind(&document.title)
        .bind(document.uploaded_at)
        .bind(&document.image.filename)
        .bind(&document.image.content_type)
        .bind(document.image.data.as_bytes())
        .bind(&document.image.description)
        .bind(&document.song.filename)
        .bind(&document.song.content_type)
        .bind(document.song.data.as_bytes())
        .bind(&document.song.artist)
        .bind(&document.song.album)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    #[tracing::instrument(skip(self), fields(db.table = "media", db.operation = "select"))]
    async fn find_all(&self) -> Result<Vec<MediaRecord>, AppError> {
        let rows = sqlx::query_as::<Postgres, MediaRow>(&format!(
            "SELECT {} FROM media",
            MEDIA_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(MediaRecord::from).collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
