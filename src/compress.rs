//! Gzip compression across byte-buffer, file, and base64 representations.

use crate::error::{GzKitError, Result};
use crate::fsutil;
use crate::options::CompressorOptions;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::io::{self, BufReader, Write};
use std::path::Path;
use tracing::warn;

/// Stateless gzip compressor.
///
/// The compression level is fixed at construction; every call allocates its
/// own encoder and buffers, so one instance can serve any number of callers
/// concurrently.
#[derive(Debug, Clone)]
pub struct Compressor {
    level: Compression,
}

impl Default for Compressor {
    fn default() -> Self {
        Self::new()
    }
}

impl Compressor {
    /// Compressor using the library's default level.
    pub fn new() -> Self {
        Self {
            level: Compression::default(),
        }
    }

    /// Compressor with an explicit configuration.
    ///
    /// Fails with [`GzKitError::InvalidLevel`] when the configured level
    /// falls outside `-2..=9`.
    pub fn with_options(options: CompressorOptions) -> Result<Self> {
        Ok(Self {
            level: options.resolve()?,
        })
    }

    /// Compress a byte buffer into a gzip stream held in memory.
    pub fn bytes_to_bytes(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut encoder = GzEncoder::new(Vec::new(), self.level);
        if let Err(err) = encoder.write_all(data) {
            finish_after_error(encoder);
            return Err(GzKitError::compression(err));
        }
        encoder.finish().map_err(GzKitError::compression)
    }

    /// Compress a byte buffer and write the result to `dest`, creating or
    /// truncating the file. Returns the number of bytes written.
    pub fn bytes_to_file(&self, data: &[u8], dest: impl AsRef<Path>) -> Result<u64> {
        let dest = dest.as_ref();
        let compressed = self.bytes_to_bytes(data)?;
        let mut file = fsutil::create_dest(dest, None)?;
        file.write_all(&compressed)
            .map_err(|err| GzKitError::io("write", dest, err))?;
        Ok(compressed.len() as u64)
    }

    /// Compress the contents of the file at `src` into memory.
    ///
    /// The source is streamed through a buffered reader rather than loaded
    /// whole. Fails with [`GzKitError::NotFound`] when `src` is missing and
    /// [`GzKitError::IsDirectory`] when it names a directory.
    pub fn file_to_bytes(&self, src: impl AsRef<Path>) -> Result<Vec<u8>> {
        let src = src.as_ref();
        let (file, _) = fsutil::open_source(src)?;
        let mut reader = BufReader::new(file);
        let mut encoder = GzEncoder::new(Vec::new(), self.level);
        if let Err(err) = io::copy(&mut reader, &mut encoder) {
            finish_after_error(encoder);
            return Err(GzKitError::io("read", src, err));
        }
        encoder.finish().map_err(GzKitError::compression)
    }

    /// Compress `src` into `dest`, streaming compressed output straight to
    /// disk.
    ///
    /// The destination is created with the source file's permission bits.
    /// The returned count is the destination's on-disk size, stat-ed after
    /// the handle is closed rather than accumulated during the copy, so a
    /// short write cannot go unreported.
    pub fn file_to_file(&self, src: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<u64> {
        let src = src.as_ref();
        let dest = dest.as_ref();
        let (file, metadata) = fsutil::open_source(src)?;
        let mut reader = BufReader::new(file);
        let dest_file = fsutil::create_dest(dest, Some(metadata.permissions()))?;
        let mut encoder = GzEncoder::new(dest_file, self.level);
        if let Err(err) = io::copy(&mut reader, &mut encoder) {
            finish_after_error(encoder);
            return Err(GzKitError::io("copy", src, err));
        }
        let dest_file = encoder.finish().map_err(GzKitError::compression)?;
        drop(dest_file);
        fsutil::finished_size(dest)
    }

    /// Compress a byte buffer and return the result as a standard padded
    /// base64 string (RFC 4648).
    pub fn bytes_to_base64(&self, data: &[u8]) -> Result<String> {
        let compressed = self.bytes_to_bytes(data)?;
        Ok(STANDARD.encode(compressed))
    }
}

/// Close a gzip stream whose transfer already failed.
///
/// The transfer error is the one reported to the caller; a close failure
/// here is logged so it is not silently dropped.
fn finish_after_error<W: Write>(encoder: GzEncoder<W>) {
    if let Err(err) = encoder.finish() {
        warn!(error = %err, "gzip stream close failed after transfer error");
    }
}
