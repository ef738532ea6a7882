//! Keyword signal sets for telling projects apart from jobs.
//!
//! Matching is plain substring search on the lowercased `company role` text,
//! so `app` also fires on `apply` and `lead` on `leadership`. Any experience
//! signal vetoes the project signals: "Project Manager" stays an experience.

use folio_core::ResumeEntry;

pub const PROJECT_SIGNALS: [&str; 10] = [
    "project",
    "portfolio",
    "website",
    "application",
    "app",
    "mern",
    "ai/ml",
    "machine learning",
    "shopping",
    "detection",
];

pub const EXPERIENCE_SIGNALS: [&str; 10] = [
    "intern",
    "internship",
    "engineer",
    "developer",
    "analyst",
    "consultant",
    "assistant",
    "associate",
    "lead",
    "manager",
];

/// True when the entry mentions a project signal and no experience signal.
#[must_use]
pub fn is_project_like(entry: &ResumeEntry) -> bool {
    let text = format!("{} {}", entry.company, entry.role).to_lowercase();
    let has_project_signal = PROJECT_SIGNALS.iter().any(|signal| text.contains(signal));
    let has_experience_signal = EXPERIENCE_SIGNALS.iter().any(|signal| text.contains(signal));
    has_project_signal && !has_experience_signal
}
