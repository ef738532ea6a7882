//! # folio-core
//!
//! Core types and error types for Folio.
//!
//! This crate provides the foundational types shared across all Folio crates:
//! - Entity structs for resume content (`ResumeEntry`, `ResumeSection`)
//! - Text cleaning helpers used by every content save path
//! - Cross-cutting error types

pub mod entities;
pub mod errors;
pub mod text;

pub use entities::{ResumeEntry, ResumeSection};
pub use errors::CoreError;
