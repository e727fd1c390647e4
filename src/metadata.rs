//! Metadata Extractor
//!
//! Reads a fresh snapshot of OS metadata for a resolved file.

use crate::error::{BrowseError, Result};
use crate::resolver::ResolvedPath;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Snapshot of a file's OS metadata. Computed per read, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    /// Basename truncated at its first `.`; `a.b.txt` reports `a`.
    pub name: String,
    /// Numeric owner id.
    pub owner: u32,
    /// Byte length on disk.
    pub size: u64,
    /// Low three octal digits of the mode bits, e.g. `"644"`.
    pub permissions: String,
}

/// Read metadata for a path classified as a file.
pub fn file_metadata(resolved: &ResolvedPath) -> Result<FileMetadata> {
    resolved.require_exists()?;
    if !resolved.is_file() {
        return Err(BrowseError::InvalidTarget(format!(
            "{} is a folder, not a file",
            resolved.relative().display()
        )));
    }

    let path = resolved.absolute();
    let meta = std::fs::metadata(path)
        .map_err(|e| BrowseError::from_io(resolved.relative(), e))?;
    let (owner, mode) = owner_and_mode(&meta);

    Ok(FileMetadata {
        name: display_name(path),
        owner,
        size: meta.len(),
        permissions: format_permissions(mode),
    })
}

/// Everything before the first `.` of the basename.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy())
        .and_then(|n| n.split('.').next().map(str::to_string))
        .unwrap_or_default()
}

fn format_permissions(mode: u32) -> String {
    format!("{:03o}", mode & 0o777)
}

#[cfg(unix)]
fn owner_and_mode(meta: &std::fs::Metadata) -> (u32, u32) {
    use std::os::unix::fs::MetadataExt;
    (meta.uid(), meta.mode())
}

#[cfg(not(unix))]
fn owner_and_mode(meta: &std::fs::Metadata) -> (u32, u32) {
    let mode = if meta.permissions().readonly() { 0o444 } else { 0o666 };
    (0, mode)
}
