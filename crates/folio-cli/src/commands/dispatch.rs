use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    tracing::debug!(?command, "dispatching command");
    match command {
        Commands::Normalize(args) => commands::normalize::handle(&args, flags),
        Commands::Candidates(args) => commands::candidates::handle(&args, flags),
        Commands::Import(args) => commands::import::handle(&args, flags).await,
        Commands::Resume { action } => commands::resume::handle(&action, flags),
    }
}
