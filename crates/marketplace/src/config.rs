//! Marketplace configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SUPPLYLINK_SESSION_FILE` - Path of the persisted session slot
//!   (default: in-memory only, nothing survives the process)
//! - `SUPPLYLINK_SIMULATED_LATENCY_MS` - Artificial delay applied to
//!   sign-up and sign-in, in milliseconds (default: 0)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::session::{JsonFileBackend, MemoryBackend, SessionBackend};

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Marketplace configuration.
#[derive(Debug, Clone, Default)]
pub struct MarketplaceConfig {
    /// Path of the persisted session slot, if sessions should survive
    /// process restarts.
    pub session_file: Option<PathBuf>,
    /// Artificial delay applied to sign-up and sign-in.
    pub simulated_latency: Duration,
}

impl MarketplaceConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let session_file = get_optional_env("SUPPLYLINK_SESSION_FILE").map(PathBuf::from);

        let simulated_latency = match get_optional_env("SUPPLYLINK_SIMULATED_LATENCY_MS") {
            Some(raw) => {
                let ms = raw.parse::<u64>().map_err(|e| {
                    ConfigError::InvalidEnvVar(
                        "SUPPLYLINK_SIMULATED_LATENCY_MS".to_owned(),
                        e.to_string(),
                    )
                })?;
                Duration::from_millis(ms)
            }
            None => Duration::ZERO,
        };

        Ok(Self {
            session_file,
            simulated_latency,
        })
    }

    /// Build the session backend this configuration describes.
    #[must_use]
    pub fn session_backend(&self) -> Box<dyn SessionBackend> {
        self.session_file.as_ref().map_or_else(
            || Box::new(MemoryBackend::new()) as Box<dyn SessionBackend>,
            |path| Box::new(JsonFileBackend::new(path)) as Box<dyn SessionBackend>,
        )
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
