use std::path::Path;

use anyhow::Context;
use folio_core::ResumeSection;

/// Read a resume document from a JSON file.
pub fn read_section(path: &Path) -> anyhow::Result<ResumeSection> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    ResumeSection::from_value(value)
        .with_context(|| format!("{} is not a resume document", path.display()))
}

/// Write a resume document as pretty JSON with a trailing newline.
pub fn write_section(path: &Path, section: &ResumeSection) -> anyhow::Result<()> {
    let value = section.to_value()?;
    let mut rendered = serde_json::to_string_pretty(&value)?;
    rendered.push('\n');
    std::fs::write(path, rendered).with_context(|| format!("failed to write {}", path.display()))
}
