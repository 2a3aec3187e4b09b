//! Character encoding detection and transcoding.
//!
//! Note payloads exported from other tools are not always plain UTF-8:
//! spreadsheet exports often carry a BOM or are UTF-16, and older exports
//! from Chinese-locale systems may be GBK. Everything is decoded to UTF-8
//! before parsing.

use encoding_rs::{Encoding, UTF_8};

/// Detect character encoding from payload bytes.
///
/// Looks for a byte order mark (UTF-8, UTF-16LE, UTF-16BE) and defaults to
/// UTF-8 if none is present.
#[must_use]
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    Encoding::for_bom(bytes).map_or(UTF_8, |(encoding, _bom_len)| encoding)
}

/// Transcode payload bytes to a UTF-8 string.
///
/// A leading BOM is removed. Invalid sequences are replaced with the
/// Unicode replacement character (�) rather than causing errors.
///
/// # Examples
///
/// ```
/// use site_notes::encoding::transcode_to_utf8;
///
/// let bytes = b"\xEF\xBB\xBF{\"content\": \"hi\"}";
/// assert_eq!(transcode_to_utf8(bytes), "{\"content\": \"hi\"}");
/// ```
#[must_use]
pub fn transcode_to_utf8(bytes: &[u8]) -> String {
    let encoding = detect_encoding(bytes);

    if encoding == UTF_8 && Encoding::for_bom(bytes).is_none() {
        // Fast path for BOM-less UTF-8
        return String::from_utf8_lossy(bytes).into_owned();
    }

    // `decode` strips the BOM itself
    let (decoded, _encoding_used, _had_errors) = encoding.decode(bytes);
    decoded.into_owned()
}

/// Transcode payload bytes using an explicit encoding label (e.g. `"gbk"`).
///
/// A BOM, when present, still takes precedence over the label. Returns
/// `None` when the label is unknown.
#[must_use]
pub fn transcode_with_label(bytes: &[u8], label: &str) -> Option<String> {
    let encoding = Encoding::for_label(label.trim().as_bytes())?;
    let (decoded, _encoding_used, _had_errors) = encoding.decode(bytes);
    Some(decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_to_utf8_without_bom() {
        assert_eq!(detect_encoding(b"{\"content\": \"x\"}"), UTF_8);
        assert_eq!(detect_encoding(b""), UTF_8);
    }

    #[test]
    fn detect_utf16le_from_bom() {
        let bytes = b"\xFF\xFE{\x00}\x00";
        assert_eq!(detect_encoding(bytes).name(), "UTF-16LE");
    }

    #[test]
    fn transcode_utf8_passthrough() {
        let result = transcode_to_utf8("短网址".as_bytes());
        assert_eq!(result, "短网址");
    }

    #[test]
    fn transcode_strips_utf8_bom() {
        let result = transcode_to_utf8(b"\xEF\xBB\xBFabc");
        assert_eq!(result, "abc");
    }

    #[test]
    fn transcode_utf16le_to_utf8() {
        let result = transcode_to_utf8(b"\xFF\xFEh\x00i\x00");
        assert_eq!(result, "hi");
    }

    #[test]
    fn transcode_gbk_with_label() {
        // "中文" in GBK
        let result = transcode_with_label(b"\xD6\xD0\xCE\xC4", "gbk");
        assert_eq!(result.as_deref(), Some("中文"));
        assert!(transcode_with_label(b"abc", "not-an-encoding").is_none());
    }

    #[test]
    fn handle_invalid_bytes_gracefully() {
        let result = transcode_to_utf8(b"Test \xFF\xFE Invalid");
        assert!(result.contains("Test"));
        assert!(result.contains("Invalid"));
    }
}
