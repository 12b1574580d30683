//! Configuration module for stocksynth.
//!
//! Loads structured configuration from environment variables, split by
//! concern: HTTP server binding and series length limits.

mod series_config;
mod server_config;

pub use series_config::SeriesEnvConfig;
pub use server_config::ServerEnvConfig;

use anyhow::{Context, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerEnvConfig,
    pub series: SeriesEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let server = ServerEnvConfig::from_env();
        let series = SeriesEnvConfig::from_env().context("Failed to load series config")?;

        Ok(Self { server, series })
    }
}
