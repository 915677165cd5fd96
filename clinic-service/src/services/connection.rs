use crate::config::MongoConfig;
use crate::services::{MongoStore, RecordStore, UnavailableStore};
use std::sync::Arc;

/// Open the one store handle the process uses.
///
/// A failed connection is not fatal: the error is logged and every record
/// route reports it until the process restarts.
pub async fn connect_store(config: &MongoConfig) -> Arc<dyn RecordStore> {
    let Some(uri) = config.uri.as_deref() else {
        tracing::error!("MONGODB_URI is not set; record routes are unavailable");
        return Arc::new(UnavailableStore::new("MONGODB_URI is not set"));
    };

    match MongoStore::connect(uri, config).await {
        Ok(store) => {
            tracing::info!("Connected to MongoDB");
            Arc::new(store)
        }
        Err(e) => {
            tracing::error!(error = %e, "MongoDB connection error");
            Arc::new(UnavailableStore::new(e.to_string()))
        }
    }
}
