//! In-memory `RecordStore` test double. Not wired into `main`; integration
//! tests build the router over it.

use crate::models::{Appointment, InsertAck, Media, User};
use crate::services::RecordStore;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;
use std::sync::Mutex;

/// In-memory store for tests. Assigns ids the way the database would and
/// keeps insertion order.
#[derive(Default)]
pub struct MockStore {
    pub users: Mutex<Vec<User>>,
    pub appointments: Mutex<Vec<Appointment>>,
    pub media: Mutex<Vec<Media>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn push<T>(
    collection: &Mutex<Vec<T>>,
    mut record: T,
    set_id: fn(&mut T, ObjectId),
) -> Result<InsertAck, AppError> {
    let id = ObjectId::new();
    set_id(&mut record, id);
    collection
        .lock()
        .map_err(|e| anyhow::anyhow!("Mock store mutex poisoned: {}", e))?
        .push(record);
    Ok(InsertAck::new(id))
}

fn snapshot<T: Clone>(collection: &Mutex<Vec<T>>) -> Result<Vec<T>, AppError> {
    let records = collection
        .lock()
        .map_err(|e| anyhow::anyhow!("Mock store mutex poisoned: {}", e))?
        .clone();
    Ok(records)
}

#[async_trait]
impl RecordStore for MockStore {
    async fn insert_user(&self, user: User) -> Result<InsertAck, AppError> {
        push(&self.users, user, |u, id| u.id = Some(id))
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        snapshot(&self.users)
    }

    async fn insert_appointment(&self, appointment: Appointment) -> Result<InsertAck, AppError> {
        push(&self.appointments, appointment, |a, id| a.id = Some(id))
    }

    async fn list_appointments(&self) -> Result<Vec<Appointment>, AppError> {
        snapshot(&self.appointments)
    }

    async fn find_appointment_by_phone(
        &self,
        phone: &str,
    ) -> Result<Option<Appointment>, AppError> {
        let found = self
            .appointments
            .lock()
            .map_err(|e| anyhow::anyhow!("Mock store mutex poisoned: {}", e))?
            .iter()
            .find(|appointment| appointment.has_phone(phone))
            .cloned();
        Ok(found)
    }

    async fn insert_media(&self, media: Media) -> Result<InsertAck, AppError> {
        push(&self.media, media, |m, id| m.id = Some(id))
    }

    async fn list_media(&self) -> Result<Vec<Media>, AppError> {
        snapshot(&self.media)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn insert_assigns_distinct_ids() {
        let store = MockStore::new();

        let first = store.insert_media(Media::default()).await.unwrap();
        let second = store.insert_media(Media::default()).await.unwrap();
        assert_ne!(first.inserted_id, second.inserted_id);

        let stored = store.list_media().await.unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].id.map(|id| id.to_hex()), Some(first.inserted_id));
    }

    #[tokio::test]
    async fn phone_lookup_returns_first_match() {
        let store = MockStore::new();
        for reason in ["checkup", "follow-up"] {
            store
                .insert_appointment(Appointment {
                    phone: Some(json!("555-0100")),
                    reason: Some(json!(reason)),
                    ..Default::default()
                })
                .await
                .unwrap();
        }

        let found = store.find_appointment_by_phone("555-0100").await.unwrap();
        assert_eq!(found.and_then(|a| a.reason), Some(json!("checkup")));
        assert!(store
            .find_appointment_by_phone("555-0199")
            .await
            .unwrap()
            .is_none());
    }
}
