//! Gzip decompression across byte-buffer, file, and base64 representations.

use crate::error::{GzKitError, Result};
use crate::fsutil;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use flate2::read::GzDecoder;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

/// Stateless gzip decompressor.
///
/// Decompression has no tunable settings, so construction takes no
/// configuration. Every call allocates its own decoder and buffers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decompressor;

impl Decompressor {
    /// New decompressor.
    pub fn new() -> Self {
        Self
    }

    /// Decompress an in-memory gzip stream into a byte buffer.
    ///
    /// Fails with [`GzKitError::Format`] when `data` is not a well-formed
    /// gzip container: bad magic bytes, truncated stream, or checksum
    /// mismatch.
    pub fn bytes_to_bytes(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut decoder = GzDecoder::new(data);
        let mut plain = Vec::new();
        decoder
            .read_to_end(&mut plain)
            .map_err(|err| GzKitError::from_decode(err, None))?;
        Ok(plain)
    }

    /// Decompress a gzip byte buffer and write the plaintext to `dest`,
    /// creating or truncating the file. Returns the number of bytes written.
    pub fn bytes_to_file(&self, data: &[u8], dest: impl AsRef<Path>) -> Result<u64> {
        let dest = dest.as_ref();
        let plain = self.bytes_to_bytes(data)?;
        let mut file = fsutil::create_dest(dest, None)?;
        file.write_all(&plain)
            .map_err(|err| GzKitError::io("write", dest, err))?;
        Ok(plain.len() as u64)
    }

    /// Decompress the gzip file at `src` into memory.
    ///
    /// Fails with [`GzKitError::NotFound`] when `src` is missing and
    /// [`GzKitError::IsDirectory`] when it names a directory.
    pub fn file_to_bytes(&self, src: impl AsRef<Path>) -> Result<Vec<u8>> {
        let src = src.as_ref();
        let (file, _) = fsutil::open_source(src)?;
        let mut decoder = GzDecoder::new(BufReader::new(file));
        let mut plain = Vec::new();
        decoder
            .read_to_end(&mut plain)
            .map_err(|err| GzKitError::from_decode(err, Some(src)))?;
        Ok(plain)
    }

    /// Decompress `src` into `dest`, streaming decoded bytes straight to
    /// disk without buffering the plaintext in memory.
    ///
    /// The destination is created with the source file's permission bits
    /// and the returned count is its on-disk size, stat-ed after the handle
    /// is closed.
    pub fn file_to_file(&self, src: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<u64> {
        let src = src.as_ref();
        let dest = dest.as_ref();
        let (file, metadata) = fsutil::open_source(src)?;
        let mut decoder = GzDecoder::new(BufReader::new(file));
        let mut dest_file = fsutil::create_dest(dest, Some(metadata.permissions()))?;
        io::copy(&mut decoder, &mut dest_file)
            .map_err(|err| GzKitError::from_decode(err, Some(src)))?;
        drop(dest_file);
        fsutil::finished_size(dest)
    }

    /// Decompress a gzip byte buffer and return the plaintext as a standard
    /// padded base64 string (RFC 4648).
    pub fn bytes_to_base64(&self, data: &[u8]) -> Result<String> {
        let plain = self.bytes_to_bytes(data)?;
        Ok(STANDARD.encode(plain))
    }

    /// Decompress the gzip file at `src` and return the plaintext as a
    /// standard padded base64 string.
    pub fn file_to_base64(&self, src: impl AsRef<Path>) -> Result<String> {
        let plain = self.file_to_bytes(src)?;
        Ok(STANDARD.encode(plain))
    }
}
