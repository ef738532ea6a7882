//! # folio-resume
//!
//! Resume entry classification and deduplication for Folio.
//!
//! Older resume documents list personal projects under "experience". This
//! crate moves those entries into the project list using keyword signal sets,
//! and deduplicates both lists by a normalized `(year, company, role)` key:
//! - [`entry_key`] / [`dedupe_entries`]: composite key and first-wins dedup
//! - [`is_project_like`]: project vs. experience keyword heuristic
//! - [`classify`]: one idempotent classification pass
//! - [`sanitize_entries`], [`apply_entries`], [`migrate`]: the interactive
//!   save path and the one-time migration path over a [`ResumeSection`]
//!
//! [`ResumeSection`]: folio_core::ResumeSection

mod classify;
mod key;
mod section;
mod signals;

pub use classify::{Classification, classify};
pub use key::{KEY_SEPARATOR, dedupe_entries, entry_key};
pub use section::{
    EntryLimits, MAX_ENTRIES, MigrationReport, apply_entries, migrate, sanitize_entries,
};
pub use signals::{EXPERIENCE_SIGNALS, PROJECT_SIGNALS, is_project_like};
