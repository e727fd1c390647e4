//! Content Accessor
//!
//! Text content is only ever read or written for `.txt` paths.

use crate::error::{BrowseError, Result};
use crate::resolver::ResolvedPath;
use std::io::Write;
use std::path::Path;

pub const TEXT_EXTENSION: &str = ".txt";

/// Whether a caller-supplied name carries the text extension.
pub fn is_text_name(name: &str) -> bool {
    name.ends_with(TEXT_EXTENSION)
}

fn is_text_path(path: &Path) -> bool {
    path.to_str().map(is_text_name).unwrap_or(false)
}

/// Read the full content of a text file as UTF-8.
pub fn read_text(resolved: &ResolvedPath) -> Result<String> {
    if !is_text_path(resolved.relative()) {
        return Err(BrowseError::UnsupportedType(
            "Only a file with extension .txt can be opened".to_string(),
        ));
    }
    resolved.require_exists()?;

    let bytes = std::fs::read(resolved.absolute())
        .map_err(|e| BrowseError::from_io(resolved.relative(), e))?;
    String::from_utf8(bytes).map_err(|source| BrowseError::DecodeError {
        path: resolved.relative().to_path_buf(),
        source,
    })
}

/// Create a new file holding `content`. Fails if anything already sits at the path.
///
/// Callers check preconditions first; the create-new open still catches a file
/// that appeared after that check.
pub(crate) fn write_text(resolved: &ResolvedPath, content: &str) -> Result<()> {
    let relative = resolved.relative();
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(resolved.absolute())
        .map_err(|e| BrowseError::from_io(relative, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| BrowseError::from_io(relative, e))?;
    Ok(())
}
