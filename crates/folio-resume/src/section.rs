//! Save and migration paths over a resume document.
//!
//! Both paths end in the same key-based dedup, so an admin re-saving the
//! resume and the one-time migration leave identical lists behind.

use folio_core::text::clean_text;
use folio_core::{ResumeEntry, ResumeSection};
use serde::Serialize;

use crate::classify::classify;
use crate::key::dedupe_entries;

/// Maximum entries kept per list on save.
pub const MAX_ENTRIES: usize = 12;

/// Field length caps applied on save, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryLimits {
    pub max_items: usize,
    pub year_chars: usize,
    pub company_chars: usize,
    pub role_chars: usize,
}

impl Default for EntryLimits {
    fn default() -> Self {
        Self {
            max_items: MAX_ENTRIES,
            year_chars: 30,
            company_chars: 120,
            role_chars: 120,
        }
    }
}

/// Clean admin-submitted entries for storage.
///
/// Trims and caps each field, drops blank entries, deduplicates by composite
/// key, then keeps at most `limits.max_items`.
#[must_use]
pub fn sanitize_entries(values: &[ResumeEntry], limits: EntryLimits) -> Vec<ResumeEntry> {
    let cleaned: Vec<ResumeEntry> = values
        .iter()
        .map(|entry| {
            ResumeEntry::new(
                clean_text(&entry.year, limits.year_chars),
                clean_text(&entry.company, limits.company_chars),
                clean_text(&entry.role, limits.role_chars),
            )
        })
        .filter(|entry| !entry.is_blank())
        .collect();

    let mut deduped = dedupe_entries(&cleaned);
    deduped.truncate(limits.max_items);
    deduped
}

/// Replace the entry lists of `section` from an admin update.
///
/// `None` leaves a list untouched, mirroring a partial update payload.
pub fn apply_entries(
    section: &mut ResumeSection,
    experiences: Option<&[ResumeEntry]>,
    projects: Option<&[ResumeEntry]>,
) {
    let limits = EntryLimits::default();
    if let Some(experiences) = experiences {
        section.experiences = sanitize_entries(experiences, limits);
    }
    if let Some(projects) = projects {
        section.projects = sanitize_entries(projects, limits);
    }
}

/// Outcome of [`migrate`], for logging and CLI output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    pub moved: Vec<ResumeEntry>,
    pub moved_count: usize,
    pub kept_experiences: usize,
    pub projects_total: usize,
}

/// Reclassify project-like experiences of `section` in place.
///
/// Safe to run repeatedly: a second run reports zero moves.
pub fn migrate(section: &mut ResumeSection) -> MigrationReport {
    let result = classify(&section.experiences, &section.projects);

    section.experiences = result.kept_experiences;
    section.projects = result.projects;

    let report = MigrationReport {
        moved_count: result.moved_count,
        moved: result.moved,
        kept_experiences: section.experiences.len(),
        projects_total: section.projects.len(),
    };

    tracing::info!(
        moved = report.moved_count,
        kept_experiences = report.kept_experiences,
        projects_total = report.projects_total,
        "resume migration complete"
    );
    for entry in &report.moved {
        tracing::info!(year = %entry.year, company = %entry.company, role = %entry.role, "moved to projects");
    }

    report
}
