use crate::dtos::{AppointmentResponse, NewAppointment, StoreResponse};
use crate::handlers::record_body;
use crate::startup::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use service_core::error::AppError;

#[tracing::instrument(skip(state, body))]
pub async fn store_appointment(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<StoreResponse>, AppError> {
    let record: NewAppointment = record_body(&body)?;
    let ack = state.store.insert_appointment(record.into()).await?;

    Ok(Json(StoreResponse {
        message: "Appointment stored successfully",
        data: ack,
    }))
}

#[tracing::instrument(skip(state))]
pub async fn list_appointments(
    State(state): State<AppState>,
) -> Result<Json<Vec<AppointmentResponse>>, AppError> {
    let appointments = state.store.list_appointments().await?;
    if appointments.is_empty() {
        return Err(AppError::NotFound(anyhow::anyhow!("No appointments found")));
    }

    Ok(Json(appointments.into_iter().map(AppointmentResponse::from).collect()))
}

#[tracing::instrument(skip(state))]
pub async fn get_appointment_by_phone(
    State(state): State<AppState>,
    Path(phone): Path<String>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let appointment = state
        .store
        .find_appointment_by_phone(&phone)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(anyhow::anyhow!(
                "No appointment found for the given phone number"
            ))
        })?;

    Ok(Json(AppointmentResponse::from(appointment)))
}
