//! Image URL normalization and Drive fallback candidates.

use std::collections::HashSet;

use url::Url;

use crate::encode::encode_uri;
use crate::provider::{self, DriveForm, DriveLink, Link};

/// Strip the wrapping admins drag along when pasting links: leading `<`, `"`
/// and whitespace; trailing `>`, `"`, whitespace, `;` and `,`.
pub(crate) fn strip_wrapping(raw: &str) -> &str {
    raw.trim_start_matches(|c: char| c == '<' || c == '"' || c.is_whitespace())
        .trim_end_matches(|c: char| matches!(c, '>' | '"' | ';' | ',') || c.is_whitespace())
}

/// True for values that never point at a hosting provider: `data:` and
/// `blob:` URIs and root-relative paths.
#[must_use]
pub fn is_local_reference(value: &str) -> bool {
    value.starts_with("data:") || value.starts_with("blob:") || value.starts_with('/')
}

/// Normalize a pasted image URL into a safe, direct-viewable form.
///
/// Never fails. Empty or wrapping-only input yields `""`; unparseable input
/// yields the percent-encoded literal. Normalizing an already-normalized URL
/// returns it unchanged.
///
/// ```
/// use folio_media::normalize;
///
/// assert_eq!(
///     normalize("https://drive.google.com/file/d/ABC123/view?usp=sharing"),
///     "https://drive.google.com/thumbnail?id=ABC123&sz=w2000",
/// );
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    let value = strip_wrapping(raw);
    if value.is_empty() {
        return String::new();
    }
    if is_local_reference(value) {
        return encode_uri(value);
    }

    let url = match Url::parse(value) {
        Ok(url) if is_web_scheme(&url) => url,
        _ => return encode_uri(value),
    };

    match provider::rewrite(&Link::new(value, &url)) {
        Some((provider, rewritten)) => {
            tracing::trace!(?provider, %rewritten, "normalized image url");
            rewritten
        }
        None => encode_uri(value),
    }
}

/// [`normalize`] for optional fields; `None` is treated as empty.
#[must_use]
pub fn normalize_opt(raw: Option<&str>) -> String {
    raw.map(normalize).unwrap_or_default()
}

/// Ordered alternates for the same image, best guess first.
///
/// For a Drive link with a file id: the normalized URL followed by the
/// thumbnail, `uc?export=view` and `uc?export=download` forms, each carrying
/// the original resource key, with duplicates removed. For anything else: the
/// normalized URL alone, or nothing when it is empty.
#[must_use]
pub fn fallback_candidates(raw: &str) -> Vec<String> {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return Vec::new();
    }

    let Some(drive) = drive_link(strip_wrapping(raw)) else {
        return vec![normalized];
    };

    let mut candidates = vec![normalized];
    candidates.extend(DriveForm::ALL.iter().map(|form| drive.url(*form)));

    let mut seen = HashSet::new();
    candidates.retain(|candidate| seen.insert(candidate.clone()));
    candidates
}

/// Provider rewrites only apply to http(s). Other schemes may carry an
/// encoded host that only parses after a first encoding pass.
fn is_web_scheme(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

fn drive_link(value: &str) -> Option<DriveLink> {
    if value.is_empty() || is_local_reference(value) {
        return None;
    }
    let url = Url::parse(value).ok().filter(is_web_scheme)?;
    DriveLink::from_link(&Link::new(value, &url))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn strip_wrapping_removes_paste_debris() {
        assert_eq!(strip_wrapping("  <\"https://x.com/a.png\">;, "), "https://x.com/a.png");
        assert_eq!(strip_wrapping("https://x.com/a.png;;"), "https://x.com/a.png");
        assert_eq!(strip_wrapping("<>"), "");
    }

    #[test]
    fn local_references_are_encoded_only() {
        assert_eq!(normalize("/uploads/my photo.png"), "/uploads/my%20photo.png");
        assert_eq!(normalize("data:image/png;base64,AAAA"), "data:image/png;base64,AAAA");
        assert_eq!(normalize("blob:https://x.com/1234"), "blob:https://x.com/1234");
    }

    #[test]
    fn local_path_that_looks_like_drive_is_not_rewritten() {
        assert_eq!(normalize("/file/d/ABC/view"), "/file/d/ABC/view");
    }

    #[test]
    fn unparseable_input_is_encoded() {
        assert_eq!(normalize("not a url"), "not%20a%20url");
        assert_eq!(normalize("www.example.com/pic.jpg"), "www.example.com/pic.jpg");
    }

    #[test]
    fn non_web_schemes_are_never_rewritten() {
        assert_eq!(
            normalize("webdav://my share.dropbox.com/a.png"),
            "webdav://my%20share.dropbox.com/a.png"
        );
        assert_eq!(
            normalize("webdav://my%20share.dropbox.com/a.png"),
            "webdav://my%20share.dropbox.com/a.png"
        );
        assert_eq!(
            normalize("ftp://drive.google.com/file/d/ABC/view"),
            "ftp://drive.google.com/file/d/ABC/view"
        );
        assert_eq!(fallback_candidates("ftp://drive.google.com/file/d/ABC/view").len(), 1);
    }

    #[test]
    fn drive_host_without_id_is_encoded() {
        assert_eq!(
            normalize("https://drive.google.com/drive/folders"),
            "https://drive.google.com/drive/folders"
        );
    }

    #[test]
    fn normalize_opt_treats_none_as_empty() {
        assert_eq!(normalize_opt(None), "");
        assert_eq!(
            normalize_opt(Some("https://x.com/a b.png")),
            "https://x.com/a%20b.png"
        );
    }

    #[test]
    fn candidates_for_non_drive_is_single_normalized() {
        assert_eq!(
            fallback_candidates("https://res.cloudinary.com/x/y.jpg"),
            vec!["https://res.cloudinary.com/x/y.jpg".to_string()]
        );
        assert!(fallback_candidates("  ").is_empty());
    }

    #[test]
    fn candidates_ignore_query_id_on_other_hosts() {
        assert_eq!(
            fallback_candidates("https://example.com/view?id=ABC"),
            vec!["https://example.com/view?id=ABC".to_string()]
        );
    }

    #[test]
    fn candidates_carry_resource_key() {
        assert_eq!(
            fallback_candidates("https://drive.google.com/file/d/F1/view?resourcekey=RK"),
            vec![
                "https://drive.google.com/thumbnail?id=F1&sz=w2000&resourcekey=RK".to_string(),
                "https://drive.google.com/uc?export=view&id=F1&resourcekey=RK".to_string(),
                "https://drive.google.com/uc?export=download&id=F1&resourcekey=RK".to_string(),
            ]
        );
    }
}
