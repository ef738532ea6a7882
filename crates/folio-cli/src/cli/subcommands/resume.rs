use std::path::PathBuf;

use clap::Subcommand;

/// Resume document maintenance.
#[derive(Clone, Debug, Subcommand)]
pub enum ResumeCommands {
    /// Move project-like experiences into the project list.
    Migrate {
        /// Resume document (JSON object with `experiences` and `projects`).
        file: PathBuf,
        /// Write the migrated document here instead of over `file`.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Report what would move without writing anything.
        #[arg(long)]
        dry_run: bool,
    },
    /// Print both entry lists after cleaning and deduplication.
    Dedupe {
        /// Resume document (JSON object with `experiences` and `projects`).
        file: PathBuf,
    },
}
