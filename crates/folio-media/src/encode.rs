//! URI-safe percent-encoding.

use std::fmt::Write;

/// Characters `encodeURI`-style encoding leaves alone besides ASCII
/// alphanumerics: the URI reserved set, the unreserved marks, and `#`.
const URI_SAFE: &[u8] = b";,/?:@&=+$-_.!~*'()#";

/// Percent-encode `value` for use as a full URI.
///
/// Structural characters (`/`, `?`, `&`, `=`, `#`, ...) are kept so the URL
/// still works. A `%` that already starts a valid `%XX` escape is kept as is,
/// which makes the encoding a fixed point: `encode_uri(encode_uri(s)) ==
/// encode_uri(s)`.
#[must_use]
pub fn encode_uri(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut encoded = String::with_capacity(value.len());

    for (idx, ch) in value.char_indices() {
        if ch == '%' {
            let is_escape = bytes
                .get(idx + 1..idx + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if is_escape {
                encoded.push('%');
            } else {
                encoded.push_str("%25");
            }
            continue;
        }

        if ch.is_ascii_alphanumeric() || (ch.is_ascii() && URI_SAFE.contains(&(ch as u8))) {
            encoded.push(ch);
            continue;
        }

        let mut buf = [0u8; 4];
        for byte in ch.encode_utf8(&mut buf).bytes() {
            let _ = write!(encoded, "%{byte:02X}");
        }
    }

    encoded
}
