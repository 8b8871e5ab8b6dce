//! Error types for gzkit operations.
//!
//! Every failure mode is a distinct variant carrying structured context
//! (path, operation name) so callers can branch on kind instead of
//! string-matching messages.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The error type for all gzkit operations.
#[derive(Debug, Error)]
pub enum GzKitError {
    /// Compression level outside the accepted `-2..=9` range.
    #[error("invalid compression level {level}: accepted range is -2..=9")]
    InvalidLevel {
        /// The rejected level value.
        level: i32,
    },

    /// Source path does not exist.
    #[error("file not found: {}", .path.display())]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// Source path names a directory instead of a regular file.
    #[error("{} is a directory, not a regular file", .path.display())]
    IsDirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// Read/write/create failure on a named file.
    #[error("failed to {operation} {}: {source}", .path.display())]
    Io {
        /// Short name of the failed step ("open", "create", "read", "write").
        operation: &'static str,
        /// The file the step was acting on.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The gzip stream could not be written or finalized.
    #[error("failed to finalize gzip stream: {source}")]
    Compression {
        /// The underlying error reported by the encoder.
        source: io::Error,
    },

    /// Input is not a valid gzip container: bad magic bytes, truncated
    /// stream, or checksum mismatch.
    #[error("invalid gzip data: {message}")]
    Format {
        /// Description of the format violation.
        message: String,
    },
}

/// Result type alias for gzkit operations.
pub type Result<T> = std::result::Result<T, GzKitError>;

impl GzKitError {
    /// Create an invalid level error.
    pub fn invalid_level(level: i32) -> Self {
        Self::InvalidLevel { level }
    }

    /// Create a not-found error.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create an is-directory error.
    pub fn is_directory(path: impl Into<PathBuf>) -> Self {
        Self::IsDirectory { path: path.into() }
    }

    /// Create an I/O error with operation and path context.
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Create a stream finalization error.
    pub fn compression(source: io::Error) -> Self {
        Self::Compression { source }
    }

    /// Create a format error.
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    /// Classify an error surfaced while reading from a gzip decoder.
    ///
    /// flate2 reports container violations (bad magic, corrupt DEFLATE
    /// stream, CRC mismatch, truncation) as `InvalidInput`, `InvalidData`,
    /// or `UnexpectedEof`; anything else is an ordinary I/O failure on the
    /// underlying source. Reads from an in-memory buffer (`path` is `None`)
    /// can only fail inside the decoder itself.
    pub(crate) fn from_decode(err: io::Error, path: Option<&Path>) -> Self {
        match err.kind() {
            io::ErrorKind::InvalidInput
            | io::ErrorKind::InvalidData
            | io::ErrorKind::UnexpectedEof => Self::format(err.to_string()),
            _ => match path {
                Some(path) => Self::io("read", path, err),
                None => Self::format(err.to_string()),
            },
        }
    }
}
