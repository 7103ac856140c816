//! Configuration loading and validation for `sealmsg`.
//!
//! All values are read from environment variables at startup.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Validated `sealmsg` configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path of the raw 32-byte key file (`ENV_SECRET_KEY_LOCATION`). **Required.**
    #[serde(rename = "env_secret_key_location")]
    pub secret_key_location: String,

    /// Path of the plaintext to seal (`ENV_PLAIN_TXT_LOCATION`). **Required.**
    #[serde(rename = "env_plain_txt_location")]
    pub plain_txt_location: String,

    /// Maximum plaintext size in bytes (`ENV_PLAIN_TXT_MAX_SIZE`).
    /// Missing or unparseable values fall back to 1 MiB.
    #[serde(rename = "env_plain_txt_max_size", default)]
    pub plain_txt_max_size: Option<String>,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is absent or empty.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build sealmsg configuration")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise sealmsg configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// Effective plaintext size limit.
    pub fn plain_txt_max_size(&self) -> u64 {
        common::max_size_or_default(self.plain_txt_max_size.as_deref())
    }

    fn validate(&self) -> Result<()> {
        if self.secret_key_location.trim().is_empty() {
            anyhow::bail!("ENV_SECRET_KEY_LOCATION is required and must not be empty");
        }
        if self.plain_txt_location.trim().is_empty() {
            anyhow::bail!("ENV_PLAIN_TXT_LOCATION is required and must not be empty");
        }
        Ok(())
    }
}
