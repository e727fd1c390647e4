//! Directory Lister

use crate::error::{BrowseError, Result};
use crate::resolver::ResolvedPath;

/// Immediate child names of a folder in OS order, dotfiles included.
pub fn list_folder(resolved: &ResolvedPath) -> Result<Vec<String>> {
    resolved.require_exists()?;
    if !resolved.is_folder() {
        return Err(BrowseError::InvalidTarget(format!(
            "{} is a file, not a folder",
            resolved.relative().display()
        )));
    }

    let relative = resolved.relative();
    let entries = std::fs::read_dir(resolved.absolute())
        .map_err(|e| BrowseError::from_io(relative, e))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| BrowseError::from_io(relative, e))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}
