//! Text cleaning helpers shared by the content save paths.

/// Trim `value` and cap it at `max_chars` characters.
///
/// The cap counts `char`s, not bytes, so multi-byte input is never split.
#[must_use]
pub fn clean_text(value: &str, max_chars: usize) -> String {
    let trimmed = value.trim();
    match trimmed.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => trimmed[..byte_idx].trim_end().to_string(),
        None => trimmed.to_string(),
    }
}

/// Lowercase `value` and collapse every run of non-alphanumeric characters
/// into a single space, trimming the result.
///
/// `"  IIDT  Pvt. Ltd "` becomes `"iidt pvt ltd"`.
#[must_use]
pub fn fold_alphanumeric(value: &str) -> String {
    let mut folded = String::with_capacity(value.len());
    let mut pending_space = false;

    for ch in value.chars() {
        if ch.is_alphanumeric() {
            if pending_space && !folded.is_empty() {
                folded.push(' ');
            }
            pending_space = false;
            folded.extend(ch.to_lowercase());
        } else {
            pending_space = true;
        }
    }

    folded
}
