//! Decoding of template file bytes.
//!
//! Template files are expected to be UTF-8, but themes in the wild ship files
//! saved with a BOM, as UTF-16, or in a legacy single-byte encoding. Decoding
//! never fails: undecodable sequences become replacement characters.

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};

/// Bytes sampled when guessing a legacy encoding.
const DETECTION_SAMPLE_SIZE: usize = 8192;

/// Decode raw file bytes to text.
///
/// Strategy:
/// 1. BOM markers (UTF-8, UTF-16 LE/BE) win and are stripped
/// 2. Strict UTF-8 (the common case)
/// 3. chardetng guess over a leading sample, decoded with replacement
///
/// # Returns
/// A tuple `(content, encoding_label)`
pub fn decode_bytes(bytes: &[u8]) -> (String, &'static str) {
    if bytes.is_empty() {
        return (String::new(), "utf-8");
    }

    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (decoded, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return (decoded.into_owned(), bom_label(encoding));
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return (text.to_string(), "utf-8");
    }

    let sample = &bytes[..bytes.len().min(DETECTION_SAMPLE_SIZE)];
    let mut detector = EncodingDetector::new();
    detector.feed(sample, sample.len() == bytes.len());
    let encoding = detector.guess(None, true);

    let (decoded, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::debug!(encoding = used.name(), "template bytes decoded with replacements");
    }
    (decoded.into_owned(), used.name())
}

fn bom_label(encoding: &'static Encoding) -> &'static str {
    if encoding == UTF_8 {
        "utf-8-sig"
    } else if encoding == UTF_16LE {
        "utf-16-le"
    } else if encoding == UTF_16BE {
        "utf-16-be"
    } else {
        encoding.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_utf8() {
        let (content, encoding) = decode_bytes("Test content 🚀".as_bytes());
        assert_eq!(content, "Test content 🚀");
        assert_eq!(encoding, "utf-8");
    }

    #[test]
    fn utf8_bom_is_stripped() {
        let mut bytes = vec![0xef, 0xbb, 0xbf];
        bytes.extend_from_slice(b"<div>");
        let (content, encoding) = decode_bytes(&bytes);
        assert_eq!(content, "<div>");
        assert_eq!(encoding, "utf-8-sig");
    }

    #[test]
    fn utf16_le_with_bom() {
        let mut bytes = vec![0xff, 0xfe];
        for unit in "<p>".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let (content, encoding) = decode_bytes(&bytes);
        assert_eq!(content, "<p>");
        assert_eq!(encoding, "utf-16-le");
    }

    #[test]
    fn legacy_bytes_decode_without_failing() {
        // "café" in windows-1252
        let (content, _) = decode_bytes(&[0x63, 0x61, 0x66, 0xe9]);
        assert!(content.starts_with("caf"));
        assert_eq!(content.chars().count(), 4);
    }

    #[test]
    fn empty_input() {
        assert_eq!(decode_bytes(&[]), (String::new(), "utf-8"));
    }
}
