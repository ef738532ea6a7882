use clap::{Args, Subcommand};

use crate::cli::subcommands::ResumeCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Normalize image URLs into direct-viewable form.
    Normalize(NormalizeArgs),
    /// List fallback URLs to try when an image fails to load.
    Candidates(CandidatesArgs),
    /// Copy a remote image into Cloudinary.
    Import(ImportArgs),
    /// Resume entry classification and cleanup.
    Resume {
        #[command(subcommand)]
        action: ResumeCommands,
    },
}

/// Arguments for `folio normalize`.
#[derive(Clone, Debug, Args)]
pub struct NormalizeArgs {
    /// One or more raw URLs.
    #[arg(required = true)]
    pub urls: Vec<String>,
}

/// Arguments for `folio candidates`.
#[derive(Clone, Debug, Args)]
pub struct CandidatesArgs {
    pub url: String,
}

/// Arguments for `folio import`.
#[derive(Clone, Debug, Args)]
pub struct ImportArgs {
    pub url: String,
    /// Destination folder (defaults to `cloudinary.default_folder`).
    #[arg(long)]
    pub folder: Option<String>,
}
