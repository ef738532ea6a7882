//! Cloudinary image storage configuration.

use serde::{Deserialize, Serialize};

/// Default upload API base URL.
fn default_api_base() -> String {
    String::from("https://api.cloudinary.com")
}

/// Default folder for imports that do not name one.
fn default_folder() -> String {
    String::from("folio/misc")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CloudinaryConfig {
    /// Cloud name (the `<cloud>` in `res.cloudinary.com/<cloud>/...`).
    #[serde(default)]
    pub cloud_name: String,

    /// API key for signed uploads.
    #[serde(default)]
    pub api_key: String,

    /// API secret for signed uploads. Never logged.
    #[serde(default)]
    pub api_secret: String,

    /// Unsigned upload preset. Used instead of a signature when set.
    #[serde(default)]
    pub upload_preset: String,

    /// Folder used when a caller does not pass one.
    #[serde(default = "default_folder")]
    pub default_folder: String,

    /// Upload API base URL. Overridable for proxies and tests.
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

impl Default for CloudinaryConfig {
    fn default() -> Self {
        Self {
            cloud_name: String::new(),
            api_key: String::new(),
            api_secret: String::new(),
            upload_preset: String::new(),
            default_folder: default_folder(),
            api_base: default_api_base(),
        }
    }
}

impl CloudinaryConfig {
    /// Check if uploads can be made: a cloud name plus either an unsigned
    /// preset or an API key/secret pair.
    pub fn is_configured(&self) -> bool {
        !self.cloud_name.is_empty() && (!self.upload_preset.is_empty() || self.has_credentials())
    }

    /// Whether a key/secret pair is available for signed uploads.
    pub fn has_credentials(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }

    /// Upload endpoint for image resources.
    pub fn upload_url(&self) -> String {
        format!(
            "{}/v1_1/{}/image/upload",
            self.api_base.trim_end_matches('/'),
            self.cloud_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = CloudinaryConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.default_folder, "folio/misc");
        assert_eq!(config.api_base, "https://api.cloudinary.com");
    }

    #[test]
    fn configured_with_key_and_secret() {
        let config = CloudinaryConfig {
            cloud_name: "demo".into(),
            api_key: "key".into(),
            api_secret: "secret".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
        assert!(config.has_credentials());
    }

    #[test]
    fn configured_with_unsigned_preset_only() {
        let config = CloudinaryConfig {
            cloud_name: "demo".into(),
            upload_preset: "unsigned_portfolio".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
        assert!(!config.has_credentials());
    }

    #[test]
    fn not_configured_without_cloud_name() {
        let config = CloudinaryConfig {
            api_key: "key".into(),
            api_secret: "secret".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }

    #[test]
    fn not_configured_with_half_a_credential_pair() {
        let config = CloudinaryConfig {
            cloud_name: "demo".into(),
            api_key: "key".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }

    #[test]
    fn upload_url_joins_base_and_cloud() {
        let config = CloudinaryConfig {
            cloud_name: "demo".into(),
            api_base: "http://localhost:9000/".into(),
            ..Default::default()
        };
        assert_eq!(config.upload_url(), "http://localhost:9000/v1_1/demo/image/upload");
    }
}
