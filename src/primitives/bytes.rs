//! Byte buffer helpers: digests, GZip and stream wrapping.

use std::io::{Cursor, Read, Write};

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use sha1::{Digest, Sha1};

use crate::error::{CodecError, Result};

/// Lowercase hex SHA-1 digest of `data`.
pub(crate) fn sha1_hex(data: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Lowercase hex MD5 digest of `data`.
pub(crate) fn md5_hex(data: &[u8]) -> String {
    format!("{:x}", md5::compute(data))
}

/// Extension methods on byte slices.
///
/// # Examples
///
/// ```
/// use extkit::primitives::BytesExt;
///
/// let packed = b"hello hello hello".gzip_compress().unwrap();
/// assert_eq!(packed.gzip_decompress().unwrap(), b"hello hello hello");
/// assert_eq!(b"".sha1_hash(), None);
/// ```
pub trait BytesExt {
    /// Lowercase hex SHA-1 digest, `None` for an empty buffer.
    fn sha1_hash(&self) -> Option<String>;

    /// Lowercase hex MD5 digest, `None` for an empty buffer.
    fn md5_hash(&self) -> Option<String>;

    /// Compresses the buffer into GZip format.
    ///
    /// An empty buffer compresses to an empty buffer.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Compression`] if the encoder fails.
    fn gzip_compress(&self) -> Result<Vec<u8>>;

    /// Decompresses a GZip buffer.
    ///
    /// An empty buffer decompresses to an empty buffer.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Compression`] for input that is not valid GZip.
    fn gzip_decompress(&self) -> Result<Vec<u8>>;

    /// Wraps the buffer in a reader positioned at the start, or `None` when
    /// empty.
    fn to_stream(&self) -> Option<Cursor<&[u8]>>;
}

impl BytesExt for [u8] {
    fn sha1_hash(&self) -> Option<String> {
        (!self.is_empty()).then(|| sha1_hex(self))
    }

    fn md5_hash(&self) -> Option<String> {
        (!self.is_empty()).then(|| md5_hex(self))
    }

    fn gzip_compress(&self) -> Result<Vec<u8>> {
        if self.is_empty() {
            return Ok(Vec::new());
        }
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(self).map_err(compression)?;
        let packed = encoder.finish().map_err(compression)?;
        tracing::debug!(input = self.len(), output = packed.len(), "gzip compressed");
        Ok(packed)
    }

    fn gzip_decompress(&self) -> Result<Vec<u8>> {
        if self.is_empty() {
            return Ok(Vec::new());
        }
        let mut unpacked = Vec::new();
        GzDecoder::new(self)
            .read_to_end(&mut unpacked)
            .map_err(compression)?;
        tracing::debug!(input = self.len(), output = unpacked.len(), "gzip decompressed");
        Ok(unpacked)
    }

    fn to_stream(&self) -> Option<Cursor<&[u8]>> {
        (!self.is_empty()).then(|| Cursor::new(self))
    }
}

fn compression(err: std::io::Error) -> CodecError {
    CodecError::Compression(err.to_string())
}
