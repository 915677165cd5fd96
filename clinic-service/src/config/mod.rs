use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct ClinicConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    /// Absent when `MONGODB_URI` is unset; the service then starts without a store.
    pub uri: Option<String>,
    pub database: String,
    pub media_collection: String,
    /// Upper bound on the startup connection check.
    pub connect_timeout: Duration,
}

impl MongoConfig {
    pub fn new(uri: Option<String>, database: impl Into<String>) -> Self {
        Self {
            uri,
            database: database.into(),
            media_collection: DEFAULT_MEDIA_COLLECTION.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

const DEFAULT_MEDIA_COLLECTION: &str = "imgVedio";
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

impl ClinicConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let mut common = core_config::Config::load()?;

        // Hosting platforms hand the port over as a bare PORT variable.
        if let Some(port) = parse_port(env::var("PORT").ok().as_deref())? {
            common.port = port;
        }
        if let Ok(level) = env::var("LOG_LEVEL") {
            common.log_level = level;
        }

        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(ClinicConfig {
            common,
            mongodb: MongoConfig {
                uri: env::var("MONGODB_URI")
                    .ok()
                    .filter(|uri| !uri.trim().is_empty()),
                database: get_env("MONGODB_DATABASE", Some("drmarvin"), is_prod)?,
                media_collection: get_env(
                    "MONGODB_MEDIA_COLLECTION",
                    Some(DEFAULT_MEDIA_COLLECTION),
                    false,
                )?,
                connect_timeout: parse_timeout(
                    env::var("MONGODB_CONNECT_TIMEOUT_SECS").ok().as_deref(),
                )?,
            },
            otlp_endpoint: env::var("OTLP_ENDPOINT")
                .ok()
                .filter(|endpoint| !endpoint.trim().is_empty()),
        })
    }
}

fn parse_port(raw: Option<&str>) -> Result<Option<u16>, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("PORT must be a port number: {}", e))
        }),
    }
}

fn parse_timeout(raw: Option<&str>) -> Result<Duration, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS)),
        Some(value) => match value.parse::<u64>() {
            Ok(0) => Err(AppError::ConfigError(anyhow::anyhow!(
                "MONGODB_CONNECT_TIMEOUT_SECS must be greater than zero"
            ))),
            Ok(secs) => Ok(Duration::from_secs(secs)),
            Err(e) => Err(AppError::ConfigError(anyhow::anyhow!(
                "MONGODB_CONNECT_TIMEOUT_SECS must be a number of seconds: {}",
                e
            ))),
        },
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(format!(
                    "{} is required in production but not set",
                    key
                ))))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(format!(
                    "{} is required but not set",
                    key
                ))))
            }
        }
    }
}
