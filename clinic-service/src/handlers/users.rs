use crate::dtos::{NewUser, StoreResponse, UserResponse};
use crate::handlers::record_body;
use crate::startup::AppState;
use axum::{body::Bytes, extract::State, Json};
use service_core::error::AppError;

#[tracing::instrument(skip(state, body))]
pub async fn store_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<StoreResponse>, AppError> {
    let record: NewUser = record_body(&body)?;
    let ack = state.store.insert_user(record.into()).await?;

    Ok(Json(StoreResponse {
        message: "Data stored successfully",
        data: ack,
    }))
}

#[tracing::instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.store.list_users().await?;
    if users.is_empty() {
        return Err(AppError::NotFound(anyhow::anyhow!("No data found")));
    }

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
