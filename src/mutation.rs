//! Mutation Engine
//!
//! Creates, empties, and deletes entries under the root. Every operation resolves its
//! target, takes the per-path write lock, re-checks preconditions against the live
//! filesystem, then performs the OS call. There is no rollback: a recursive empty that
//! fails partway leaves the folder partially emptied and reports the OS error.

use crate::concurrency::PathLockManager;
use crate::content::{is_text_name, write_text};
use crate::error::{BrowseError, Result};
use crate::listing::list_folder;
use crate::resolver::{PathResolver, ResolvedPath};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;
use walkdir::WalkDir;

/// Acknowledgement for a completed mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mutation {
    FolderCreated,
    FileCreated,
    FolderEmptied,
    FolderDeleted,
    FileDeleted,
}

impl Mutation {
    /// User-facing success message.
    pub fn detail(&self) -> &'static str {
        match self {
            Mutation::FolderCreated => "Folder Created Successfully",
            Mutation::FileCreated => "File Created Successfully",
            Mutation::FolderEmptied => "Folder Emptied Successfully",
            Mutation::FolderDeleted => "Folder Deleted Successfully",
            Mutation::FileDeleted => "File Deleted Successfully",
        }
    }
}

/// Performs guarded filesystem mutations relative to one root.
#[derive(Clone)]
pub struct MutationEngine {
    resolver: PathResolver,
    locks: Arc<PathLockManager>,
}

impl MutationEngine {
    pub fn new(resolver: PathResolver, locks: Arc<PathLockManager>) -> Self {
        Self { resolver, locks }
    }

    /// Create a folder and any missing parents.
    pub fn create_folder(&self, path: &str) -> Result<Mutation> {
        self.with_target(path, |target| {
            if !target.is_missing() {
                return Err(BrowseError::AlreadyExists(target.relative().to_path_buf()));
            }
            std::fs::create_dir_all(target.absolute())
                .map_err(|e| BrowseError::from_io(target.relative(), e))?;
            info!(path = %target.relative().display(), "folder created");
            Ok(Mutation::FolderCreated)
        })
    }

    /// Create a new `.txt` file holding `content`. The parent folder must exist.
    pub fn create_file(&self, path: &str, content: &str) -> Result<Mutation> {
        if !is_text_name(path) {
            return Err(BrowseError::UnsupportedType(
                "Files of type other than .txt cannot be created".to_string(),
            ));
        }
        self.with_target(path, |target| {
            if !target.is_missing() {
                return Err(BrowseError::AlreadyExists(target.relative().to_path_buf()));
            }
            if let Some(parent) = target.absolute().parent() {
                if !parent.is_dir() {
                    let relative_parent = target
                        .relative()
                        .parent()
                        .map(|p| p.to_path_buf())
                        .unwrap_or_default();
                    return Err(BrowseError::NotFound(relative_parent));
                }
            }
            write_text(target, content)?;
            info!(
                path = %target.relative().display(),
                bytes = content.len(),
                "file created"
            );
            Ok(Mutation::FileCreated)
        })
    }

    /// Remove every file and subfolder under a folder, keeping the folder itself.
    pub fn empty_folder(&self, path: &str) -> Result<Mutation> {
        if is_text_name(path) {
            return Err(BrowseError::InvalidTarget(
                "Note that empty_folder is only to empty a folder, not to empty the contents of files"
                    .to_string(),
            ));
        }
        self.with_target(path, |target| {
            target.require_exists()?;
            require_folder(target)?;

            let mut removed = 0usize;
            // One level only; remove_dir_all takes care of everything below a child folder.
            for entry in WalkDir::new(target.absolute())
                .min_depth(1)
                .max_depth(1)
                .follow_links(false)
            {
                let entry = entry.map_err(|e| {
                    let at = e
                        .path()
                        .and_then(|p| p.strip_prefix(target.absolute()).ok())
                        .map(|p| target.relative().join(p))
                        .unwrap_or_else(|| target.relative().to_path_buf());
                    match e.into_io_error() {
                        Some(io) => BrowseError::from_io(&at, io),
                        None => BrowseError::InvalidTarget(format!(
                            "Filesystem loop under {}",
                            target.relative().display()
                        )),
                    }
                })?;
                let removal = if entry.file_type().is_dir() {
                    std::fs::remove_dir_all(entry.path())
                } else {
                    std::fs::remove_file(entry.path())
                };
                removal.map_err(|e| {
                    BrowseError::from_io(&target.relative().join(entry.file_name()), e)
                })?;
                removed += 1;
            }
            info!(path = %target.relative().display(), removed, "folder emptied");
            Ok(Mutation::FolderEmptied)
        })
    }

    /// Remove a folder that has no entries.
    pub fn delete_folder(&self, path: &str) -> Result<Mutation> {
        self.with_target(path, |target| {
            target.require_exists()?;
            require_folder(target)?;
            if target.relative().as_os_str().is_empty() {
                return Err(BrowseError::InvalidTarget(
                    "The root folder cannot be deleted".to_string(),
                ));
            }
            if !list_folder(target)?.is_empty() {
                return Err(BrowseError::NotEmpty(target.relative().to_path_buf()));
            }
            std::fs::remove_dir(target.absolute())
                .map_err(|e| BrowseError::from_io(target.relative(), e))?;
            info!(path = %target.relative().display(), "folder deleted");
            Ok(Mutation::FolderDeleted)
        })
    }

    /// Remove a file.
    pub fn delete_file(&self, path: &str) -> Result<Mutation> {
        self.with_target(path, |target| {
            target.require_exists()?;
            if target.is_folder() {
                return Err(BrowseError::InvalidTarget(format!(
                    "{} is a folder; use delete_folder",
                    target.relative().display()
                )));
            }
            std::fs::remove_file(target.absolute())
                .map_err(|e| BrowseError::from_io(target.relative(), e))?;
            info!(path = %target.relative().display(), "file deleted");
            Ok(Mutation::FileDeleted)
        })
    }

    /// Resolve `path`, hold its write lock, and run `op` on a freshly classified target.
    fn with_target<T>(
        &self,
        path: &str,
        op: impl FnOnce(&ResolvedPath) -> Result<T>,
    ) -> Result<T> {
        let resolved = self.resolver.resolve(path)?;
        let lock = self.locks.get_lock(resolved.absolute());
        let _guard = lock.write();
        let target = resolved.reclassify()?;
        op(&target)
    }
}

fn require_folder(target: &ResolvedPath) -> Result<()> {
    if target.is_file() {
        return Err(BrowseError::InvalidTarget(format!(
            "{} is a file, not a folder",
            target.relative().display()
        )));
    }
    Ok(())
}
