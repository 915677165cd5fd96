use crate::dtos::{MediaResponse, NewMedia, StoreResponse};
use crate::handlers::record_body;
use crate::startup::AppState;
use axum::{body::Bytes, extract::State, Json};
use service_core::error::AppError;

#[tracing::instrument(skip(state, body))]
pub async fn store_media(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<StoreResponse>, AppError> {
    let record: NewMedia = record_body(&body)?;
    let ack = state.store.insert_media(record.into()).await?;

    Ok(Json(StoreResponse {
        message: "Image and video data stored successfully",
        data: ack,
    }))
}

#[tracing::instrument(skip(state))]
pub async fn list_media(
    State(state): State<AppState>,
) -> Result<Json<Vec<MediaResponse>>, AppError> {
    let media = state.store.list_media().await?;
    if media.is_empty() {
        return Err(AppError::NotFound(anyhow::anyhow!(
            "No image and video data found"
        )));
    }

    Ok(Json(media.into_iter().map(MediaResponse::from).collect()))
}
