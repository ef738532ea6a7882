use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::NormalizeArgs;
use crate::output::output;

#[derive(Debug, Serialize, PartialEq, Eq)]
struct NormalizedUrl {
    input: String,
    normalized: String,
}

/// Handle `folio normalize`.
pub fn handle(args: &NormalizeArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&normalize_all(&args.urls), flags.format)
}

fn normalize_all(urls: &[String]) -> Vec<NormalizedUrl> {
    urls.iter()
        .map(|input| NormalizedUrl {
            input: input.clone(),
            normalized: folio_media::normalize(input),
        })
        .collect()
}
