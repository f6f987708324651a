use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{extract::State, Json};
use medialib_core::models::MediaRecord;
use std::sync::Arc;

/// Return every stored record, payloads included, in the store's natural order.
#[tracing::instrument(skip(state), fields(operation = "list_media"))]
pub async fn list_media(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MediaRecord>>, HttpAppError> {
    let collection = state.store.collection()?;
    let media = collection.find_all().await?;
    tracing::debug!(count = media.len(), "Listed media");
    Ok(Json(media))
}
