//! Compression level configuration.

use crate::error::{GzKitError, Result};
use flate2::Compression;

/// Entropy-only coding, the fastest setting the engine offers.
pub const HUFFMAN_ONLY: i32 = -2;
/// Let the underlying library pick its default level.
pub const DEFAULT_LEVEL: i32 = -1;
/// Store without compression.
pub const NO_COMPRESSION: i32 = 0;
/// Fastest DEFLATE level.
pub const BEST_SPEED: i32 = 1;
/// Smallest output.
pub const BEST_COMPRESSION: i32 = 9;

/// Configuration for a [`Compressor`](crate::Compressor).
///
/// `level` accepts `-2..=9`; `None` means "use the library default". The
/// level is validated when the compressor is constructed, not on first use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompressorOptions {
    /// Requested compression level, or `None` for the library default.
    pub level: Option<i32>,
}

impl CompressorOptions {
    /// Options with an explicit level.
    pub fn with_level(level: i32) -> Self {
        Self { level: Some(level) }
    }

    /// Resolve the configured level to a flate2 setting.
    ///
    /// `-1` maps to the library default and `-2` to the fastest setting;
    /// values outside `-2..=9` are rejected with
    /// [`GzKitError::InvalidLevel`].
    pub(crate) fn resolve(&self) -> Result<Compression> {
        match self.level {
            None | Some(DEFAULT_LEVEL) => Ok(Compression::default()),
            Some(HUFFMAN_ONLY) => Ok(Compression::fast()),
            Some(level @ NO_COMPRESSION..=BEST_COMPRESSION) => Ok(Compression::new(level as u32)),
            Some(level) => Err(GzKitError::invalid_level(level)),
        }
    }
}
