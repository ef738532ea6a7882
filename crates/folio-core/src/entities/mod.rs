//! Entity structs for Folio content documents.
//!
//! All structs derive `Serialize` and `Deserialize` with the camelCase field
//! names used by the stored documents and the admin API payloads.

mod resume;

pub use resume::{ResumeEntry, ResumeSection};
