//! On-disk encoding of the contact file.
//!
//! The file is the Borsh encoding of a `BTreeMap<String, String>`:
//!
//! ```text
//! u32 LE   entry count
//! for each entry, in ascending name order:
//!   u32 LE   name length in bytes,  then the UTF-8 name
//!   u32 LE   phone length in bytes, then the UTF-8 phone number
//! ```
//!
//! There is no header and no version field.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Error, Result};

/// Encode the name to phone-number mapping.
///
/// # Errors
///
/// Returns an error if a field is longer than `u32::MAX` bytes.
pub fn encode(entries: &BTreeMap<String, String>) -> Result<Vec<u8>> {
    borsh::to_vec(entries).map_err(Error::Encode)
}

/// Decode a mapping previously written by [`encode`].
///
/// `path` is only used for error context.
///
/// # Errors
///
/// Returns [`Error::Decode`] on truncated input, invalid UTF-8 or trailing bytes.
pub fn decode(bytes: &[u8], path: &Path) -> Result<BTreeMap<String, String>> {
    borsh::from_slice(bytes).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BTreeMap<String, String> {
        BTreeMap::from([
            ("Alice".to_string(), "12345".to_string()),
            ("bob".to_string(), "67890".to_string()),
        ])
    }

    #[test]
    fn test_encode_empty() {
        let bytes = encode(&BTreeMap::new()).unwrap();
        assert_eq!(bytes, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_encode_layout() {
        let entries = BTreeMap::from([("A".to_string(), "1".to_string())]);
        let bytes = encode(&entries).unwrap();

        assert_eq!(
            bytes,
            vec![1, 0, 0, 0, 1, 0, 0, 0, b'A', 1, 0, 0, 0, b'1']
        );
    }

    #[test]
    fn test_decode_written_bytes() {
        let entries = sample();
        let bytes = encode(&entries).unwrap();

        let decoded = decode(&bytes, Path::new("book.bin")).unwrap();
        assert_eq!(decoded, entries);
    }

    #[test]
    fn test_decode_unicode_and_empty_strings() {
        let entries = BTreeMap::from([
            (String::new(), String::new()),
            ("Zoë Ångström".to_string(), "+46 (0)8-123 45".to_string()),
        ]);
        let bytes = encode(&entries).unwrap();

        assert_eq!(decode(&bytes, Path::new("book.bin")).unwrap(), entries);
    }

    #[test]
    fn test_decode_truncated() {
        let bytes = encode(&sample()).unwrap();
        let truncated = &bytes[..bytes.len() - 3];

        let err = decode(truncated, Path::new("book.bin")).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn test_decode_trailing_bytes() {
        let mut bytes = encode(&sample()).unwrap();
        bytes.push(0xff);

        let err = decode(&bytes, Path::new("book.bin")).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let bytes = vec![1, 0, 0, 0, 1, 0, 0, 0, 0xff, 1, 0, 0, 0, b'1'];

        let err = decode(&bytes, Path::new("book.bin")).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn test_decode_error_carries_path() {
        let err = decode(&[7], Path::new("/data/book.bin")).unwrap_err();
        assert!(err.to_string().contains("/data/book.bin"));
    }
}
