//! One classification pass over a resume's experience and project lists.

use folio_core::ResumeEntry;
use serde::Serialize;

use crate::key::{KeyedEntries, dedupe_entries, entry_key};
use crate::signals::is_project_like;

/// Result of [`classify`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Experiences that stay experiences, deduplicated, in input order.
    pub kept_experiences: Vec<ResumeEntry>,
    /// Existing projects first, then newly moved entries, deduplicated.
    pub projects: Vec<ResumeEntry>,
    /// Entries moved from experiences into projects, in encounter order.
    pub moved: Vec<ResumeEntry>,
    /// `moved.len()`, for reporting.
    pub moved_count: usize,
}

/// Move project-like experiences into the project list.
///
/// Existing projects are indexed by composite key (first occurrence wins). A
/// project-like experience whose key is new is appended to the projects and
/// counted as moved; one whose key is already present is dropped, since the
/// project list already covers it. Everything else stays an experience.
///
/// Running `classify` again on its own output moves nothing.
#[must_use]
pub fn classify(experiences: &[ResumeEntry], existing_projects: &[ResumeEntry]) -> Classification {
    let mut projects = KeyedEntries::default();
    for project in existing_projects {
        projects.insert(project);
    }

    let mut kept = Vec::new();
    let mut moved = Vec::new();
    for entry in experiences {
        if !is_project_like(entry) {
            kept.push(entry.clone());
        } else if projects.insert(entry) {
            moved.push(entry.trimmed());
        } else {
            tracing::debug!(key = ?entry_key(entry), "dropping experience already listed as project");
        }
    }

    Classification {
        kept_experiences: dedupe_entries(&kept),
        projects: projects.into_entries(),
        moved_count: moved.len(),
        moved,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(year: &str, company: &str, role: &str) -> ResumeEntry {
        ResumeEntry::new(year, company, role)
    }

    #[test]
    fn moves_project_like_experiences() {
        let experiences = vec![
            entry("2024", "IIDT", "Full Stack Web Developer Intern"),
            entry("2023", "Online Shopping Website", "Cart, checkout, payments"),
        ];

        let result = classify(&experiences, &[]);

        assert_eq!(result.kept_experiences, vec![experiences[0].clone()]);
        assert_eq!(result.projects, vec![experiences[1].clone()]);
        assert_eq!(result.moved, vec![experiences[1].clone()]);
        assert_eq!(result.moved_count, 1);
    }

    #[test]
    fn existing_projects_come_first() {
        let existing = vec![entry("2022", "Blog Application (MERN)", "REST APIs")];
        let experiences = vec![entry("2023", "Personal Portfolio Website", "Animations")];

        let result = classify(&experiences, &existing);

        assert_eq!(
            result.projects,
            vec![
                entry("2022", "Blog Application (MERN)", "REST APIs"),
                entry("2023", "Personal Portfolio Website", "Animations"),
            ]
        );
    }

    #[test]
    fn already_listed_project_is_dropped_not_kept() {
        let existing = vec![entry("2023", "Personal Portfolio Website", "Animations")];
        let experiences = vec![entry("2023", "personal portfolio website ", "animations")];

        let result = classify(&experiences, &existing);

        assert!(result.kept_experiences.is_empty());
        assert_eq!(result.projects, existing);
        assert_eq!(result.moved_count, 0);
    }

    #[test]
    fn existing_project_is_not_overwritten() {
        let existing = vec![entry("2023", "Portfolio Website", "Original text")];
        let experiences = vec![entry("2023", "PORTFOLIO website", "original TEXT")];

        let result = classify(&experiences, &existing);

        assert_eq!(result.projects[0].role, "Original text");
    }

    #[test]
    fn duplicate_existing_projects_collapse() {
        let existing = vec![
            entry("2024", "Detection App", "CV"),
            entry("2024", "detection app", "cv"),
        ];
        let result = classify(&[], &existing);
        assert_eq!(result.projects, vec![entry("2024", "Detection App", "CV")]);
    }
}
