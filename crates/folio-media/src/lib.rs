//! # folio-media
//!
//! Image URL handling for Folio content.
//!
//! Admins paste image links from wherever the file happens to live. This crate
//! turns those links into something safe to store and render:
//! - [`normalize`] rewrites Google Drive and Dropbox share links into
//!   direct-viewable URLs and percent-encodes everything else
//! - [`fallback_candidates`] lists alternate Drive formats, best guess first,
//!   for consumers that retry on load failure
//! - [`import_to_storage`] copies a remote image into owned storage
//!   ([`CloudinaryStore`]), degrading to the hot-linked URL on failure
//! - [`normalize_image_fields`] applies [`normalize`] to named fields of a JSON
//!   payload on the read path
//!
//! None of the URL functions fail: malformed input degrades to a best-effort
//! encoded pass-through.

mod encode;
mod error;
mod fields;
mod import;
mod normalize;
mod provider;
pub mod store;

pub use encode::encode_uri;
pub use error::{FailedAttempt, ImportError, StorageError};
pub use fields::normalize_image_fields;
pub use import::{import_to_storage, try_import};
pub use normalize::{fallback_candidates, is_local_reference, normalize, normalize_opt};
pub use provider::{DriveForm, DriveLink, Provider};
pub use store::{CloudinaryStore, ImageStore, StoredImage};
