use clinic_service::config::ClinicConfig;
use clinic_service::services::init_metrics;
use clinic_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = ClinicConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing(
        "clinic-service",
        &config.common.log_level,
        config.otlp_endpoint.as_deref(),
    );

    // Must be installed before any metric is recorded
    if let Err(e) = init_metrics() {
        tracing::warn!("Metrics disabled: {}", e);
    }

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to start clinic-service: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
