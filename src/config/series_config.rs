//! Series length limits applied before generation.

use anyhow::{Context, Result, bail};
use std::env;

/// Series environment configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesEnvConfig {
    pub default_days: i64,
    pub min_days: i64,
    pub max_days: i64,
}

impl Default for SeriesEnvConfig {
    fn default() -> Self {
        Self {
            default_days: 252,
            min_days: 5,
            max_days: 1260, // 5 years
        }
    }
}

impl SeriesEnvConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            default_days: parse_var("DEFAULT_DAYS", defaults.default_days)?,
            min_days: parse_var("MIN_DAYS", defaults.min_days)?,
            max_days: parse_var("MAX_DAYS", defaults.max_days)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_days < 1 {
            bail!("MIN_DAYS must be at least 1, got {}", self.min_days);
        }
        if self.min_days > self.max_days {
            bail!(
                "MIN_DAYS ({}) must not exceed MAX_DAYS ({})",
                self.min_days,
                self.max_days
            );
        }
        if !(self.min_days..=self.max_days).contains(&self.default_days) {
            bail!(
                "DEFAULT_DAYS ({}) must lie within [{}, {}]",
                self.default_days,
                self.min_days,
                self.max_days
            );
        }
        Ok(())
    }

    /// Clamps a requested day count into `[min_days, max_days]`.
    pub fn clamp_days(&self, days: i64) -> i64 {
        days.clamp(self.min_days, self.max_days)
    }
}

fn parse_var(key: &str, default: i64) -> Result<i64> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<i64>()
            .with_context(|| format!("Invalid {}: {}", key, raw)),
        Err(_) => Ok(default),
    }
}
