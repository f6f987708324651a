//! Configuration validation
//!
//! Validates configuration values at startup to catch misconfigurations early.

use anyhow::Result;
use medialib_core::Config;

pub fn validate_config(config: &Config) -> Result<()> {
    if config.is_production() && config.cors_origins().iter().any(|o| o == "*") {
        return Err(anyhow::anyhow!(
            "CORS configured to allow all origins (*) in production. \
            Please set specific allowed origins via CORS_ORIGINS environment variable."
        ));
    }

    if config.db_max_connections() == 0 {
        return Err(anyhow::anyhow!("Database max connections cannot be 0"));
    }

    if config.db_timeout_seconds() == 0 {
        return Err(anyhow::anyhow!("Database timeout cannot be 0"));
    }

    if config.max_upload_size_bytes() == Some(0) {
        return Err(anyhow::anyhow!("MAX_UPLOAD_SIZE_MB cannot be 0"));
    }

    Ok(())
}
