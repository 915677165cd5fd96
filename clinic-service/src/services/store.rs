use crate::models::{Appointment, InsertAck, Media, User};
use async_trait::async_trait;
use service_core::error::AppError;

/// The document store behind the record routes.
///
/// One method per route operation. Implementations hold the three collection
/// handles (`users`, `appointments`, `media`) and are shared by every request.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn insert_user(&self, user: User) -> Result<InsertAck, AppError>;
    async fn list_users(&self) -> Result<Vec<User>, AppError>;

    async fn insert_appointment(&self, appointment: Appointment) -> Result<InsertAck, AppError>;
    async fn list_appointments(&self) -> Result<Vec<Appointment>, AppError>;
    /// First appointment whose `phone` equals `phone`, if any.
    async fn find_appointment_by_phone(&self, phone: &str) -> Result<Option<Appointment>, AppError>;

    async fn insert_media(&self, media: Media) -> Result<InsertAck, AppError>;
    async fn list_media(&self) -> Result<Vec<Media>, AppError>;

    async fn health_check(&self) -> Result<(), AppError>;
}

/// Stand-in used when the startup connection failed. Every call fails with
/// the startup connection error; nothing reconnects.
#[derive(Debug, Clone)]
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> AppError {
        AppError::ConnectionError(anyhow::anyhow!(
            "Document store is not connected: {}",
            self.reason
        ))
    }
}

#[async_trait]
impl RecordStore for UnavailableStore {
    async fn insert_user(&self, _user: User) -> Result<InsertAck, AppError> {
        Err(self.error())
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Err(self.error())
    }

    async fn insert_appointment(&self, _appointment: Appointment) -> Result<InsertAck, AppError> {
        Err(self.error())
    }

    async fn list_appointments(&self) -> Result<Vec<Appointment>, AppError> {
        Err(self.error())
    }

    async fn find_appointment_by_phone(
        &self,
        _phone: &str,
    ) -> Result<Option<Appointment>, AppError> {
        Err(self.error())
    }

    async fn insert_media(&self, _media: Media) -> Result<InsertAck, AppError> {
        Err(self.error())
    }

    async fn list_media(&self) -> Result<Vec<Media>, AppError> {
        Err(self.error())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Err(self.error())
    }
}
