//! Configuration module
//!
//! Settings are read from the environment (after loading a `.env` file when present).
//! Every value has a hard-coded fallback so the service starts with no configuration.

use std::env;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/media_library";
const MAX_CONNECTIONS: u32 = 10;
const CONNECTION_TIMEOUT_SECS: u64 = 30;
const DEFAULT_STATIC_DIR: &str = "client/build";

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    pub cors_origins: Vec<String>,
    pub static_dir: String,
    /// Optional cap on request bodies; `None` leaves uploads unbounded.
    pub max_upload_size_bytes: Option<usize>,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let server_port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("Invalid PORT '{}': {}", raw, e))?,
            None => DEFAULT_PORT,
        };

        let database_url = lookup("DATABASE_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let db_max_connections = lookup("DB_MAX_CONNECTIONS")
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(MAX_CONNECTIONS);

        let db_timeout_seconds = lookup("DB_TIMEOUT_SECONDS")
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(CONNECTION_TIMEOUT_SECS);

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let static_dir = lookup("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        let max_upload_size_bytes = match lookup("MAX_UPLOAD_SIZE_MB") {
            Some(raw) => {
                let mb = raw
                    .trim()
                    .parse::<usize>()
                    .map_err(|e| anyhow::anyhow!("Invalid MAX_UPLOAD_SIZE_MB '{}': {}", raw, e))?;
                let bytes = mb.checked_mul(1024 * 1024).ok_or_else(|| {
                    anyhow::anyhow!("MAX_UPLOAD_SIZE_MB '{}' is too large", raw)
                })?;
                Some(bytes)
            }
            None => None,
        };

        Ok(Config {
            server_port,
            database_url,
            db_max_connections,
            db_timeout_seconds,
            cors_origins,
            static_dir,
            max_upload_size_bytes,
            environment,
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
    }

    pub fn db_timeout_seconds(&self) -> u64 {
        self.db_timeout_seconds
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.cors_origins
    }

    pub fn static_dir(&self) -> &str {
        &self.static_dir
    }

    pub fn max_upload_size_bytes(&self) -> Option<usize> {
        self.max_upload_size_bytes
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }
}
