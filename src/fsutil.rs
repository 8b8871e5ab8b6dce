//! Filesystem helpers shared by the compressor and decompressor.

use crate::error::{GzKitError, Result};
use std::fs::{self, File};
use std::io;
use std::path::Path;

/// Open a source file for reading, rejecting missing paths and directories.
///
/// The metadata is returned alongside the handle so callers can copy
/// permission bits to a destination file.
pub(crate) fn open_source(path: &Path) -> Result<(File, fs::Metadata)> {
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => GzKitError::not_found(path),
        _ => GzKitError::io("open", path, err),
    })?;
    let metadata = file
        .metadata()
        .map_err(|err| GzKitError::io("stat", path, err))?;
    if metadata.is_dir() {
        return Err(GzKitError::is_directory(path));
    }
    Ok((file, metadata))
}

/// Create (truncating if present) a destination file, optionally applying
/// permission bits taken from the source file.
pub(crate) fn create_dest(path: &Path, permissions: Option<fs::Permissions>) -> Result<File> {
    let file = File::create(path).map_err(|err| GzKitError::io("create", path, err))?;
    if let Some(permissions) = permissions {
        file.set_permissions(permissions)
            .map_err(|err| GzKitError::io("set permissions on", path, err))?;
    }
    Ok(file)
}

/// Size of a freshly written destination file, read back after the handle
/// is closed so a short write cannot go unreported.
pub(crate) fn finished_size(path: &Path) -> Result<u64> {
    let metadata = fs::metadata(path).map_err(|err| GzKitError::io("stat", path, err))?;
    Ok(metadata.len())
}
