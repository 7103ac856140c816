//! Configuration loading and validation for `openmsg`.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Validated `openmsg` configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path of the raw 32-byte key file (`ENV_SECRET_KEY_LOCATION`). **Required.**
    #[serde(rename = "env_secret_key_location")]
    pub secret_key_location: String,

    /// Path of the sealed envelope (`ENV_CIPHER_TXT_LOCATION`). **Required.**
    #[serde(rename = "env_cipher_txt_location")]
    pub cipher_txt_location: String,

    /// Maximum envelope size in bytes (`ENV_CIPHER_TXT_MAX_SIZE`).
    #[serde(rename = "env_cipher_txt_max_size", default)]
    pub cipher_txt_max_size: Option<String>,

    /// Tracing log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build openmsg configuration")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise openmsg configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// Effective envelope size limit; 1 MiB unless configured.
    pub fn cipher_txt_max_size(&self) -> u64 {
        common::max_size_or_default(self.cipher_txt_max_size.as_deref())
    }

    fn validate(&self) -> Result<()> {
        if self.secret_key_location.trim().is_empty() {
            anyhow::bail!("ENV_SECRET_KEY_LOCATION is required and must not be empty");
        }
        if self.cipher_txt_location.trim().is_empty() {
            anyhow::bail!("ENV_CIPHER_TXT_LOCATION is required and must not be empty");
        }
        Ok(())
    }
}
