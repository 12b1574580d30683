use crate::config::{Config, SeriesEnvConfig};

/// Immutable per-server state handed to every handler.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub series: SeriesEnvConfig,
}

impl AppState {
    pub fn new(series: SeriesEnvConfig) -> Self {
        Self { series }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.series)
    }
}
