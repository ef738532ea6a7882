//! Owned image storage.
//!
//! [`ImageStore`] is the seam between the import logic and whatever hosts the
//! copies. [`CloudinaryStore`] is the production implementation; tests supply
//! in-memory stores.

mod cloudinary;
mod http;

pub use cloudinary::CloudinaryStore;

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// An image copied into owned storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredImage {
    /// Canonical HTTPS URL of the stored copy.
    pub secure_url: String,
    /// Provider-side identifier, when the provider returns one.
    pub public_id: Option<String>,
}

/// A destination that can fetch a remote image and keep a copy.
pub trait ImageStore {
    /// Whether `url` already points at this store's CDN.
    fn is_hosted(&self, url: &str) -> bool;

    /// Ask the store to fetch `source_url` and keep it under `folder`.
    fn upload(
        &self,
        source_url: &str,
        folder: &str,
    ) -> impl Future<Output = Result<StoredImage, StorageError>> + Send;
}
