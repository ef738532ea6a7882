use anyhow::Context;
use folio_media::{CloudinaryStore, ImportError, StoredImage, try_import};
use serde::Serialize;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::ImportArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ImportReport {
    input: String,
    /// URL to store on the content record.
    url: String,
    imported: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    public_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl ImportReport {
    fn new(input: &str, result: Result<StoredImage, ImportError>) -> Self {
        match result {
            Ok(stored) => Self {
                input: input.to_string(),
                url: stored.secure_url,
                imported: true,
                public_id: stored.public_id,
                reason: None,
            },
            Err(error) => Self {
                input: input.to_string(),
                url: folio_media::normalize(input),
                imported: false,
                public_id: None,
                reason: Some(error.to_string()),
            },
        }
    }
}

/// Handle `folio import`.
///
/// A failed import is not a command failure: the report carries the
/// hot-linked URL and the reason, the same answer `import_to_storage` gives.
pub async fn handle(args: &ImportArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = bootstrap::load_config()?;
    let cloudinary = config.require_cloudinary()?.clone();
    let store = CloudinaryStore::new(cloudinary, &config.media)
        .context("failed to build cloudinary client")?;

    let folder = args
        .folder
        .clone()
        .unwrap_or_else(|| store.default_folder().to_string());

    let result = try_import(&store, &args.url, &folder).await;
    output(&ImportReport::new(&args.url, result), flags.format)
}
