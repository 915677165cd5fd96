//! Router construction and server lifecycle.

use crate::config::ClinicConfig;
use crate::handlers;
use crate::services::{connect_store, RecordStore};
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{metrics_middleware, request_id_middleware, REQUEST_ID_HEADER};
use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

/// Shared application state. The store is the only thing handlers share.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route("/store", post(handlers::store_user))
        .route("/get-data", get(handlers::list_users))
        .route("/appointment", post(handlers::store_appointment))
        .route("/appointments", get(handlers::list_appointments))
        .route("/appointments/:phone", get(handlers::get_appointment_by_phone))
        .route(
            "/img-video",
            post(handlers::store_media).get(handlers::list_media),
        )
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(CompressionLayer::new())
        .with_state(state)
}

type ServerFuture = Pin<Box<dyn Future<Output = std::io::Result<()>> + Send>>;

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    server: ServerFuture,
}

impl Application {
    /// Bind the listener, then connect the store. The port is open before the
    /// connection check starts, and a failed check does not fail the build.
    pub async fn build(config: ClinicConfig) -> Result<Self, AppError> {
        // Port 0 binds a random port (used by tests)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();
        tracing::info!("Bound port {}", port);

        let store = connect_store(&config.mongodb).await;
        let app = build_router(AppState::new(store));

        tracing::info!("Server is running on port {}", port);

        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

        Ok(Self {
            port,
            server: Box::pin(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
