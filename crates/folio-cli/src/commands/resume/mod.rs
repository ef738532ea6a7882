mod dedupe;
mod migrate;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ResumeCommands;

/// Handle `folio resume`.
pub fn handle(action: &ResumeCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ResumeCommands::Migrate {
            file,
            output,
            dry_run,
        } => migrate::run(file, output.as_deref(), *dry_run, flags),
        ResumeCommands::Dedupe { file } => dedupe::run(file, flags),
    }
}
