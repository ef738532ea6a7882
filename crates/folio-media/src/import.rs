//! Importing remote images into owned storage.

use std::collections::HashSet;

use url::Url;

use crate::error::{FailedAttempt, ImportError};
use crate::normalize::{fallback_candidates, is_local_reference, normalize};
use crate::store::{ImageStore, StoredImage};

/// Copy the image behind `raw` into `store` under `folder`.
///
/// The normalized URL is tried first, then each fallback candidate in order;
/// the first stored copy wins. A failed attempt is logged and the next one
/// tried.
///
/// # Errors
///
/// Returns an [`ImportError`] describing why nothing was stored: no URL, a
/// local or non-http(s) reference, a URL the store already hosts, or every
/// attempt failing (with each attempt's error).
pub async fn try_import<S: ImageStore>(
    store: &S,
    raw: &str,
    folder: &str,
) -> Result<StoredImage, ImportError> {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return Err(ImportError::Empty);
    }
    if is_local_reference(&normalized) || !is_remote_http(&normalized) {
        return Err(ImportError::NotRemote(normalized));
    }
    if store.is_hosted(&normalized) {
        return Err(ImportError::AlreadyHosted(normalized));
    }

    let mut seen = HashSet::new();
    let sources: Vec<String> = std::iter::once(normalized)
        .chain(fallback_candidates(raw))
        .filter(|url| seen.insert(url.clone()))
        .collect();

    let mut attempts = Vec::new();
    for source_url in sources {
        match store.upload(&source_url, folder).await {
            Ok(stored) => {
                tracing::info!(folder, %source_url, secure_url = %stored.secure_url, "image imported");
                return Ok(stored);
            }
            Err(error) => {
                tracing::warn!(folder, %source_url, %error, "image import attempt failed");
                attempts.push(FailedAttempt { source_url, error });
            }
        }
    }

    Err(ImportError::Exhausted { attempts })
}

/// Copy the image behind `raw` into `store`, falling back to hot-linking.
///
/// Returns the stored copy's URL on success. Whenever nothing is stored (see
/// [`try_import`]) the normalized URL is returned instead, so a broken
/// optional image never blocks saving the rest of a content record.
pub async fn import_to_storage<S: ImageStore>(store: &S, raw: &str, folder: &str) -> String {
    match try_import(store, raw, folder).await {
        Ok(stored) => stored.secure_url,
        Err(error) => {
            tracing::debug!(folder, %error, "keeping hot-linked image url");
            normalize(raw)
        }
    }
}

fn is_remote_http(value: &str) -> bool {
    Url::parse(value).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}
