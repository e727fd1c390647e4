//! Browser facade
//!
//! The entry point a request layer calls: one value owning the root, the resolver,
//! and the mutation engine. Reads return a tagged [`Entry`] so callers handle folders,
//! files, and missing targets exhaustively.

use crate::concurrency::PathLockManager;
use crate::content::read_text;
use crate::error::{BrowseError, Result};
use crate::listing::list_folder;
use crate::metadata::{file_metadata, FileMetadata};
use crate::mutation::MutationEngine;
use crate::resolver::{Classification, PathResolver, ResolvedPath};
use crate::root::RootContext;
use serde_json::{json, Value};
use std::sync::Arc;

/// What a read found at a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Folder { listing: Vec<String> },
    File { metadata: FileMetadata, content: String },
    Missing,
}

impl Entry {
    /// Response body in the `is_folder` / `is_file` shape.
    ///
    /// Returns `None` for `Missing`; callers report that as not found.
    pub fn to_json(&self) -> Option<Value> {
        match self {
            Entry::Folder { listing } => Some(json!({
                "is_folder": true,
                "folder_contents": listing,
            })),
            Entry::File { metadata, content } => Some(json!({
                "is_file": true,
                "name": metadata.name,
                "owner": metadata.owner,
                "size": metadata.size,
                "permissions": metadata.permissions,
                "file_contents": content,
            })),
            Entry::Missing => None,
        }
    }
}

/// Root-scoped browsing and mutation service.
#[derive(Clone)]
pub struct Browser {
    resolver: PathResolver,
    locks: Arc<PathLockManager>,
    mutations: MutationEngine,
}

impl Browser {
    pub fn new(root: RootContext) -> Self {
        let resolver = PathResolver::new(root);
        let locks = Arc::new(PathLockManager::new());
        let mutations = MutationEngine::new(resolver.clone(), locks.clone());
        Self {
            resolver,
            locks,
            mutations,
        }
    }

    pub fn root(&self) -> &RootContext {
        self.resolver.root()
    }

    pub fn resolve(&self, path: &str) -> Result<ResolvedPath> {
        self.resolver.resolve(path)
    }

    /// Read whatever is at `path`; `Missing` is a value, not an error.
    pub fn inspect(&self, path: &str) -> Result<Entry> {
        let resolved = self.resolver.resolve(path)?;
        let lock = self.locks.get_lock(resolved.absolute());
        let _guard = lock.read();
        let resolved = resolved.reclassify()?;

        match resolved.classification() {
            Classification::Missing => Ok(Entry::Missing),
            Classification::Folder => Ok(Entry::Folder {
                listing: list_folder(&resolved)?,
            }),
            Classification::File => {
                let metadata = file_metadata(&resolved)?;
                let content = read_text(&resolved)?;
                Ok(Entry::File { metadata, content })
            }
        }
    }

    /// Read `path`, failing with `NotFound` when nothing is there.
    pub fn browse(&self, path: &str) -> Result<Entry> {
        match self.inspect(path)? {
            Entry::Missing => {
                let relative = self.resolver.resolve(path)?.relative().to_path_buf();
                Err(BrowseError::NotFound(relative))
            }
            entry => Ok(entry),
        }
    }

    pub fn mutations(&self) -> &MutationEngine {
        &self.mutations
    }
}
