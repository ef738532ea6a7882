use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CandidatesArgs;
use crate::output::output;

/// Handle `folio candidates`.
pub fn handle(args: &CandidatesArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let candidates = folio_media::fallback_candidates(&args.url);
    output(
        &json!({
            "input": args.url,
            "normalized": folio_media::normalize(&args.url),
            "candidates": candidates,
        }),
        flags.format,
    )
}
