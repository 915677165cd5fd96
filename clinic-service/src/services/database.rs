use crate::config::MongoConfig;
use crate::models::{Appointment, InsertAck, Media, User};
use crate::services::RecordStore;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::ClientOptions, Client as MongoClient, Collection};
use serde::{de::DeserializeOwned, Serialize};
use service_core::error::AppError;

pub const USERS_COLLECTION: &str = "users";
pub const APPOINTMENTS_COLLECTION: &str = "appointments";

#[derive(Clone)]
pub struct MongoStore {
    client: MongoClient,
    users: Collection<User>,
    appointments: Collection<Appointment>,
    media: Collection<Media>,
}

impl MongoStore {
    pub async fn connect(uri: &str, config: &MongoConfig) -> Result<Self, AppError> {
        tracing::info!(database = %config.database, "Connecting to MongoDB");
        let mut options = ClientOptions::parse(uri).await.map_err(|e| {
            tracing::error!("Failed to parse MongoDB connection string: {}", e);
            AppError::from(e)
        })?;
        options.server_selection_timeout = Some(config.connect_timeout);
        options.connect_timeout = Some(config.connect_timeout);

        let client = MongoClient::with_options(options).map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(&config.database);

        // The driver connects lazily; a ping makes an unreachable server fail here.
        db.run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach MongoDB: {}", e);
                AppError::from(e)
            })?;

        tracing::info!(
            database = %config.database,
            media_collection = %config.media_collection,
            "Successfully connected to MongoDB database"
        );
        Ok(Self {
            users: db.collection(USERS_COLLECTION),
            appointments: db.collection(APPOINTMENTS_COLLECTION),
            media: db.collection(&config.media_collection),
            client,
        })
    }
}

async fn insert<T>(collection: &Collection<T>, record: T) -> Result<InsertAck, AppError>
where
    T: Serialize + Send + Sync,
{
    let result = collection.insert_one(record, None).await.map_err(|e| {
        tracing::error!(collection = %collection.name(), "Failed to insert record: {}", e);
        AppError::from(e)
    })?;

    let ack = InsertAck::from_bson(result.inserted_id);
    tracing::info!(
        collection = %collection.name(),
        inserted_id = %ack.inserted_id,
        "Record stored"
    );
    Ok(ack)
}

async fn find_all<T>(collection: &Collection<T>) -> Result<Vec<T>, AppError>
where
    T: DeserializeOwned + Unpin + Send + Sync,
{
    let cursor = collection.find(None, None).await.map_err(|e| {
        tracing::error!(collection = %collection.name(), "Failed to query records: {}", e);
        AppError::from(e)
    })?;

    cursor.try_collect().await.map_err(|e| {
        tracing::error!(collection = %collection.name(), "Failed to read records: {}", e);
        AppError::from(e)
    })
}

#[async_trait]
impl RecordStore for MongoStore {
    async fn insert_user(&self, user: User) -> Result<InsertAck, AppError> {
        insert(&self.users, user).await
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        find_all(&self.users).await
    }

    async fn insert_appointment(&self, appointment: Appointment) -> Result<InsertAck, AppError> {
        insert(&self.appointments, appointment).await
    }

    async fn list_appointments(&self) -> Result<Vec<Appointment>, AppError> {
        find_all(&self.appointments).await
    }

    async fn find_appointment_by_phone(
        &self,
        phone: &str,
    ) -> Result<Option<Appointment>, AppError> {
        self.appointments
            .find_one(doc! { "phone": phone }, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to look up appointment by phone: {}", e);
                AppError::from(e)
            })
    }

    async fn insert_media(&self, media: Media) -> Result<InsertAck, AppError> {
        insert(&self.media, media).await
    }

    async fn list_media(&self) -> Result<Vec<Media>, AppError> {
        find_all(&self.media).await
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}
