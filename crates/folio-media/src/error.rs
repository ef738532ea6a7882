//! Storage and import error types.

use thiserror::Error;

/// Errors that can occur when talking to an image store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// HTTP transport error (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the store.
        status: u16,
        /// Provider error message or raw response body.
        message: String,
    },

    /// The store answered with a body we could not use.
    #[error("parse error: {0}")]
    Parse(String),

    /// The store returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },
}

/// One upload attempt that did not produce a stored image.
#[derive(Debug)]
pub struct FailedAttempt {
    pub source_url: String,
    pub error: StorageError,
}

/// Why an image was not imported into owned storage.
///
/// Every variant is recoverable: [`crate::import_to_storage`] answers all of
/// them with the normalized (hot-linked) URL.
#[derive(Debug, Error)]
pub enum ImportError {
    /// No URL was provided.
    #[error("no image url provided")]
    Empty,

    /// `data:`/`blob:` URIs, local paths, and non-http(s) schemes stay as they are.
    #[error("not a remote http(s) url: {0}")]
    NotRemote(String),

    /// The URL already points at the target store.
    #[error("already hosted by the target store: {0}")]
    AlreadyHosted(String),

    /// Every candidate was tried and rejected.
    #[error("all {} upload attempts failed", .attempts.len())]
    Exhausted { attempts: Vec<FailedAttempt> },
}
