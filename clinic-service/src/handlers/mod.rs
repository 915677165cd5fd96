pub mod appointments;
pub mod health;
pub mod media;
pub mod users;

pub use appointments::{get_appointment_by_phone, list_appointments, store_appointment};
pub use health::{health_check, metrics_endpoint, readiness_check};
pub use media::{list_media, store_media};
pub use users::{list_users, store_user};

use axum::body::Bytes;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use service_core::error::AppError;

/// Pick the named fields of `T` out of a JSON object body.
///
/// The body is read as JSON whatever the `Content-Type`, and an empty body
/// counts as `{}`. Only a non-object or unparsable body is rejected; the
/// fields themselves are taken as they are.
fn record_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    let object = if body.is_empty() {
        Map::new()
    } else {
        serde_json::from_slice::<Map<String, Value>>(body)
            .map_err(|e| AppError::ValidationError(format!("Expected a JSON object: {}", e)))?
    };
    serde_json::from_value(Value::Object(object))
        .map_err(|e| AppError::ValidationError(e.to_string()))
}
