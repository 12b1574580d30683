//! HTTP server configuration parsing from environment variables.

use std::env;

/// Server environment configuration
#[derive(Debug, Clone)]
pub struct ServerEnvConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerEnvConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl ServerEnvConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("STOCKSYNTH_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("STOCKSYNTH_PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .unwrap_or(5000),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
