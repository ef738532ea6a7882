//! # folio-config
//!
//! Layered configuration loading for Folio using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FOLIO_*` prefix, `__` as separator)
//! 2. Project-level `.folio/config.toml`
//! 3. User-level `~/.config/folio/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FOLIO_CLOUDINARY__CLOUD_NAME` -> `cloudinary.cloud_name`,
//! `FOLIO_MEDIA__REQUEST_TIMEOUT_SECS` -> `media.request_timeout_secs`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use folio_config::FolioConfig;
//!
//! let config = FolioConfig::load_with_dotenv().expect("config");
//!
//! if config.cloudinary.is_configured() {
//!     println!("Uploading to: {}", config.cloudinary.upload_url());
//! }
//! ```

mod cloudinary;
mod error;
mod media;

pub use cloudinary::CloudinaryConfig;
pub use error::ConfigError;
pub use media::MediaConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub cloudinary: CloudinaryConfig,
    #[serde(default)]
    pub media: MediaConfig,
}

impl FolioConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads `.env` from the current directory (if present) before building
    /// the figment, so `.env` values feed the environment layer.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".folio/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("FOLIO_").split("__"))
    }

    /// Return the Cloudinary section, or an error if uploads are impossible.
    pub fn require_cloudinary(&self) -> Result<&CloudinaryConfig, ConfigError> {
        if self.cloudinary.is_configured() {
            Ok(&self.cloudinary)
        } else {
            Err(ConfigError::NotConfigured {
                section: "cloudinary".to_string(),
            })
        }
    }

    /// Reject values that would make every request fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.media.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "media.request_timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if !self.cloudinary.api_base.starts_with("http://")
            && !self.cloudinary.api_base.starts_with("https://")
        {
            return Err(ConfigError::InvalidValue {
                field: "cloudinary.api_base".to_string(),
                reason: format!("expected an http(s) URL, got '{}'", self.cloudinary.api_base),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("folio").join("config.toml"))
    }
}
