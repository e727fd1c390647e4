//! Path Resolver
//!
//! Joins caller-supplied relative paths onto the browsing root and classifies the
//! result. Every read and mutation starts here.

use crate::error::{BrowseError, Result};
use crate::root::RootContext;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

/// What currently sits at a resolved location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Missing,
    File,
    Folder,
}

/// A root-confined absolute path plus its classification at resolution time.
///
/// Never cached: the classification is only as fresh as the `resolve` call that made it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    relative: PathBuf,
    absolute: PathBuf,
    classification: Classification,
}

impl ResolvedPath {
    /// Normalized path relative to the root.
    pub fn relative(&self) -> &Path {
        &self.relative
    }

    pub fn absolute(&self) -> &Path {
        &self.absolute
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn is_missing(&self) -> bool {
        self.classification == Classification::Missing
    }

    pub fn is_file(&self) -> bool {
        self.classification == Classification::File
    }

    pub fn is_folder(&self) -> bool {
        self.classification == Classification::Folder
    }

    /// Fail with `NotFound` unless something exists at this path.
    pub fn require_exists(&self) -> Result<&Self> {
        if self.is_missing() {
            return Err(BrowseError::NotFound(self.relative.clone()));
        }
        Ok(self)
    }

    /// Re-query the filesystem for the current classification.
    pub fn reclassify(&self) -> Result<Self> {
        Ok(Self {
            relative: self.relative.clone(),
            absolute: self.absolute.clone(),
            classification: classify(&self.absolute, &self.relative)?,
        })
    }
}

/// Resolves relative paths against a fixed root.
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: RootContext,
}

impl PathResolver {
    pub fn new(root: RootContext) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &RootContext {
        &self.root
    }

    /// Resolve `relative_path` against the root and classify it.
    ///
    /// Leading separators never override the root. `..` segments are folded lexically
    /// and may not climb above the root, and the deepest existing ancestor must
    /// canonicalize to a location under the root. Both violations fail with `OutOfScope`.
    pub fn resolve(&self, relative_path: &str) -> Result<ResolvedPath> {
        let relative = normalize(relative_path)?;
        let absolute = self.root.path().join(&relative);
        self.check_confined(relative_path, &absolute)?;

        let classification = classify(&absolute, &relative)?;
        debug!(
            relative = %relative.display(),
            ?classification,
            "resolved path"
        );
        Ok(ResolvedPath {
            relative,
            absolute,
            classification,
        })
    }

    fn check_confined(&self, input: &str, absolute: &Path) -> Result<()> {
        // Symlinks inside the root may point elsewhere; the lexical check cannot see that.
        for ancestor in absolute.ancestors() {
            if let Ok(canonical) = dunce::canonicalize(ancestor) {
                if canonical.starts_with(self.root.path()) {
                    return Ok(());
                }
                warn!(input, target = %canonical.display(), "rejected symlink escape");
                return Err(BrowseError::OutOfScope(input.to_string()));
            }
        }
        Err(BrowseError::OutOfScope(input.to_string()))
    }
}

/// Fold a caller path into a clean relative path, rejecting climbs above the root.
fn normalize(input: &str) -> Result<PathBuf> {
    let mut parts: Vec<&OsStr> = Vec::new();
    for component in Path::new(input).components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
            Component::ParentDir => {
                if parts.pop().is_none() {
                    warn!(input, "rejected parent-directory escape");
                    return Err(BrowseError::OutOfScope(input.to_string()));
                }
            }
            Component::Normal(name) => parts.push(name),
        }
    }
    Ok(parts.iter().collect())
}

fn classify(absolute: &Path, relative: &Path) -> Result<Classification> {
    match std::fs::metadata(absolute) {
        Ok(meta) if meta.is_dir() => Ok(Classification::Folder),
        Ok(_) => Ok(Classification::File),
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => Err(BrowseError::Io {
            path: relative.to_path_buf(),
            source: e,
        }),
        // Any other lookup failure (including a file used as a parent) means nothing is there.
        Err(_) => Ok(Classification::Missing),
    }
}
