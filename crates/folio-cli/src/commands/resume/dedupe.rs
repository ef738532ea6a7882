use std::path::Path;

use folio_core::ResumeSection;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::commands::shared::document::read_section;
use crate::output::output;

pub fn run(file: &Path, flags: &GlobalFlags) -> anyhow::Result<()> {
    let section = clean_section(read_section(file)?);
    output(
        &json!({
            "experiences": section.experiences,
            "projects": section.projects,
        }),
        flags.format,
    )
}

/// Run both lists through the admin save path.
fn clean_section(mut section: ResumeSection) -> ResumeSection {
    let experiences = std::mem::take(&mut section.experiences);
    let projects = std::mem::take(&mut section.projects);
    folio_resume::apply_entries(&mut section, Some(&experiences), Some(&projects));
    section
}
