//! # gzkit
//!
//! Convenience wrappers around gzip compression and decompression.
//!
//! The actual DEFLATE/gzip work is delegated to [`flate2`]; this crate is
//! the adaptation layer that maps between storage representations - byte
//! buffer, file path, base64 string - and flate2's streaming encoder and
//! decoder, with a closed set of structured errors.
//!
//! ## Example
//!
//! ```rust
//! use gzkit::{Compressor, Decompressor};
//!
//! let compressor = Compressor::new();
//! let decompressor = Decompressor::new();
//!
//! let data = b"Hello, World!";
//! let compressed = compressor.bytes_to_bytes(data).unwrap();
//! let plain = decompressor.bytes_to_bytes(&compressed).unwrap();
//! assert_eq!(plain, data);
//! ```
//!
//! Both [`Compressor`] and [`Decompressor`] are stateless: every call
//! allocates its own streams and buffers, so a single instance can be
//! shared freely across threads.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compress;
pub mod decompress;
pub mod error;
pub mod options;

mod fsutil;

pub use compress::Compressor;
pub use decompress::Decompressor;
pub use error::{GzKitError, Result};
pub use options::CompressorOptions;
