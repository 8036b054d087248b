use super::types::AssetRef;

/// Resolve a filename under a base directory into an [`AssetRef`].
///
/// Returns `None` when the filename is missing or empty ("no resource").
/// The filename is percent-encoded so names with spaces and mixed case stay
/// valid URL path segments:
///
/// ```rust
/// use gridkey::catalog::resolve_asset;
///
/// let audio = resolve_asset("audio", Some("CM FREE.mp3")).unwrap();
/// assert_eq!(audio.locator, "/audio/CM%20FREE.mp3");
/// assert_eq!(audio.file_name, "CM FREE.mp3");
///
/// assert!(resolve_asset("images", None).is_none());
/// assert!(resolve_asset("images", Some("")).is_none());
/// ```
pub fn resolve_asset(base: &str, file_name: Option<&str>) -> Option<AssetRef> {
    let file_name = file_name.filter(|f| !f.is_empty())?;
    let base = base.trim_matches('/');
    let locator = if base.is_empty() {
        format!("/{}", encode_uri_component(file_name))
    } else {
        format!("/{}/{}", base, encode_uri_component(file_name))
    };
    Some(AssetRef {
        locator,
        file_name: file_name.to_string(),
    })
}

/// Percent-encode a single path segment.
///
/// Keeps the same unreserved set as a browser's `encodeURIComponent`
/// (`A-Z a-z 0-9 - _ . ! ~ * ' ( )`); every other UTF-8 byte becomes `%XX`.
pub fn encode_uri_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            out.push('%');
            out.push(HEX[(byte >> 4) as usize] as char);
            out.push(HEX[(byte & 0x0F) as usize] as char);
        }
    }
    out
}

const HEX: &[u8; 16] = b"0123456789ABCDEF";

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}
