//! Application configuration.
//!
//! Read from `<config dir>/ratify/config.json`, falling back to defaults when
//! the file is absent. `RATIFY_API_URL` and `RATIFY_SETTLE_DELAY_MS` override
//! the file.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Environment variable overriding the review service URL.
pub const API_URL_ENV: &str = "RATIFY_API_URL";

/// Environment variable overriding the removal settle delay.
pub const SETTLE_DELAY_ENV: &str = "RATIFY_SETTLE_DELAY_MS";

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_SETTLE_DELAY_MS: u64 = 300;

/// Preferred color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Light theme.
    Light,
    /// Dark theme.
    #[default]
    Dark,
}

/// Runtime configuration for a review session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Root URL of the review service.
    pub api_base_url: String,
    /// How long a resolved row stays visible before it is dropped. Zero disables the animation.
    pub settle_delay_ms: u64,
    /// Color theme.
    pub theme: ThemePreference,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            theme: ThemePreference::default(),
        }
    }
}

impl ReviewConfig {
    /// Default location of the config file.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ratify")
            .join("config.json")
    }

    /// Load from the default location and apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or if
    /// an override is malformed.
    pub async fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::default_path()).await?;
        config.apply_overrides(
            std::env::var(API_URL_ENV).ok(),
            std::env::var(SETTLE_DELAY_ENV).ok(),
        )?;
        Ok(config)
    }

    /// Load from a specific file. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub async fn load_from(path: &std::path::Path) -> Result<Self> {
        if !tokio::fs::try_exists(path).await? {
            return Ok(Self::default());
        }
        let contents = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Apply override values, as read from the environment.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the settle delay is not a whole number of milliseconds.
    pub fn apply_overrides(
        &mut self,
        api_url: Option<String>,
        settle_delay_ms: Option<String>,
    ) -> Result<()> {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url.trim().to_string();
        }
        if let Some(delay) = settle_delay_ms {
            self.settle_delay_ms = delay.trim().parse().map_err(|_| {
                Error::Config(format!("{SETTLE_DELAY_ENV} must be milliseconds, got '{delay}'"))
            })?;
        }
        Ok(())
    }

    /// Settle delay as a `Duration`.
    #[must_use]
    pub const fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}
