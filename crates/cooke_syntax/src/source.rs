//! Loading source text.
//!
//! A session reads its whole input up front; after that the token stream cannot fail. Any problem getting
//! the text is a [`SourceError`] and aborts the session before the first lexeme is classified.

use std::io::Read;

use crate::diagnostics::SourceError;

/// Maximum source size (100 MB).
///
/// Larger inputs are rejected instead of being buffered in memory.
pub const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read all of `reader` into a `String`.
///
/// ## Errors
/// - [`SourceError::Io`] if reading fails.
/// - [`SourceError::TooLarge`] if the input exceeds [`MAX_SOURCE_SIZE`].
/// - [`SourceError::InvalidUtf8`] if the bytes are not UTF-8.
#[tracing::instrument(skip_all)]
pub fn read_source<R: Read>(reader: R) -> Result<String, SourceError> {
    let mut bytes = Vec::new();
    reader.take(MAX_SOURCE_SIZE + 1).read_to_end(&mut bytes)?;

    // Only the first byte past the cap is read, so the real size is unknown here.
    if bytes.len() as u64 > MAX_SOURCE_SIZE {
        return Err(SourceError::TooLarge { max: MAX_SOURCE_SIZE });
    }

    tracing::debug!(bytes = bytes.len(), "source loaded");
    String::from_utf8(bytes).map_err(SourceError::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_source_utf8() {
        let text = read_source("x = 1 ;\n".as_bytes()).unwrap();
        assert_eq!(text, "x = 1 ;\n");
    }

    #[test]
    fn test_read_source_rejects_invalid_utf8() {
        let err = read_source(&[0x78, 0xff, 0xfe][..]).unwrap_err();
        assert!(matches!(err, SourceError::InvalidUtf8(_)));
    }

    #[test]
    fn test_read_source_accepts_exactly_the_cap() {
        let text = read_source(std::io::repeat(b' ').take(MAX_SOURCE_SIZE)).unwrap();
        assert_eq!(text.len() as u64, MAX_SOURCE_SIZE);
    }

    #[test]
    fn test_read_source_rejects_one_byte_over_the_cap() {
        let err = read_source(std::io::repeat(b' ').take(MAX_SOURCE_SIZE + 1)).unwrap_err();
        assert!(matches!(err, SourceError::TooLarge { max: MAX_SOURCE_SIZE }));
        assert_eq!(err.to_string(), "input is too large (more than 104857600 bytes)");
    }

    #[test]
    fn test_read_source_surfaces_io_errors() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"))
            }
        }
        let err = read_source(Broken).unwrap_err();
        assert!(matches!(err, SourceError::Io(_)));
    }
}
