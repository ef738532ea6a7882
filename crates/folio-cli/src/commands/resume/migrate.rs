use std::path::{Path, PathBuf};

use folio_resume::MigrationReport;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::document::{read_section, write_section};
use crate::output::output;

#[derive(Debug, Serialize)]
struct MigrateOutput {
    #[serde(flatten)]
    report: MigrationReport,
    dry_run: bool,
    written: Option<PathBuf>,
}

pub fn run(
    file: &Path,
    destination: Option<&Path>,
    dry_run: bool,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let result = migrate_file(file, destination, dry_run)?;
    if let (Some(path), false) = (&result.written, flags.quiet) {
        eprintln!(
            "moved {} entries to projects, wrote {}",
            result.report.moved_count,
            path.display()
        );
    }
    output(&result, flags.format)
}

fn migrate_file(
    file: &Path,
    destination: Option<&Path>,
    dry_run: bool,
) -> anyhow::Result<MigrateOutput> {
    let mut section = read_section(file)?;
    let report = folio_resume::migrate(&mut section);

    let written = if dry_run {
        None
    } else {
        let target = destination.unwrap_or(file);
        write_section(target, &section)?;
        Some(target.to_path_buf())
    };

    Ok(MigrateOutput {
        report,
        dry_run,
        written,
    })
}
