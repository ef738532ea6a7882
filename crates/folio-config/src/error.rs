//! Errors raised while loading or checking Folio configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `FOLIO_*` variable could not be merged or extracted.
    #[error("could not read configuration sources: {0}")]
    Figment(#[from] figment::Error),

    /// A section needed by the requested operation is missing credentials,
    /// e.g. `cloudinary` without a cloud name.
    #[error("[{section}] is not configured; set it in .folio/config.toml or FOLIO_* variables")]
    NotConfigured { section: String },

    /// A field holds a value that would make every request fail.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}
