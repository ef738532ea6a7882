//! Cloudinary upload client.
//!
//! Cloudinary fetches remote URLs itself, so an import is a single form POST
//! with `file=<source url>`. Requests are either unsigned (an upload preset)
//! or signed with SHA-256 over the sorted parameters plus the API secret.

use std::time::Duration;

use folio_config::{CloudinaryConfig, MediaConfig};
use sha2::{Digest, Sha256};
use url::Url;

use super::http::check_response;
use super::{ImageStore, StoredImage};
use crate::error::StorageError;

#[derive(serde::Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
    public_id: Option<String>,
}

/// HTTP client for Cloudinary's image upload API.
#[derive(Debug, Clone)]
pub struct CloudinaryStore {
    http: reqwest::Client,
    config: CloudinaryConfig,
}

impl CloudinaryStore {
    /// Create a store with the timeout and user agent from `media`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: CloudinaryConfig, media: &MediaConfig) -> Result<Self, StorageError> {
        let http = reqwest::Client::builder()
            .user_agent(media.user_agent.clone())
            .timeout(Duration::from_secs(media.request_timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    /// Folder used when the caller has no better one.
    #[must_use]
    pub fn default_folder(&self) -> &str {
        &self.config.default_folder
    }

    /// Form parameters for one upload, signature included when signing.
    fn upload_params(&self, source_url: &str, folder: &str, timestamp: i64) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("folder", folder.to_string()),
            ("overwrite", "false".to_string()),
            ("unique_filename", "true".to_string()),
            ("use_filename", "true".to_string()),
        ];

        if !self.config.upload_preset.is_empty() {
            params.push(("upload_preset", self.config.upload_preset.clone()));
        }

        if self.config.has_credentials() {
            params.push(("timestamp", timestamp.to_string()));
            let signature = sign(&params, &self.config.api_secret);
            params.push(("api_key", self.config.api_key.clone()));
            params.push(("signature", signature));
            params.push(("signature_algorithm", "sha256".to_string()));
        }

        params.push(("file", source_url.to_string()));
        params
    }
}

impl ImageStore for CloudinaryStore {
    fn is_hosted(&self, url: &str) -> bool {
        Url::parse(url).ok().and_then(|u| u.host_str().map(str::to_ascii_lowercase)).is_some_and(
            |host| host == "res.cloudinary.com" || host.ends_with(".res.cloudinary.com"),
        )
    }

    async fn upload(&self, source_url: &str, folder: &str) -> Result<StoredImage, StorageError> {
        let params = self.upload_params(source_url, folder, chrono::Utc::now().timestamp());
        tracing::debug!(source_url, folder, "uploading image to cloudinary");

        let resp = self
            .http
            .post(self.config.upload_url())
            .header(reqwest::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(form_body(&params))
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let data: UploadResponse = resp.json().await?;
        let secure_url = data
            .secure_url
            .filter(|url| !url.is_empty())
            .ok_or_else(|| StorageError::Parse("upload response has no secure_url".to_string()))?;

        Ok(StoredImage {
            secure_url,
            public_id: data.public_id,
        })
    }
}

/// Cloudinary request signature: `k1=v1&k2=v2...` sorted by key, secret
/// appended, SHA-256, lowercase hex.
fn sign(params: &[(&'static str, String)], api_secret: &str) -> String {
    let mut sorted: Vec<_> = params.iter().filter(|(_, value)| !value.is_empty()).collect();
    sorted.sort_by_key(|(key, _)| *key);

    let to_sign = sorted
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    let digest = Sha256::digest(format!("{to_sign}{api_secret}").as_bytes());
    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}

fn form_body(params: &[(&'static str, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
