//! Per-path locking for mutations within one process
//!
//! A mutation holds the write lock for its target from precondition check until the
//! OS call returns, so two requests racing on the same path inside this process are
//! serialized. Other processes touching the tree are not covered.

use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Lock registry keyed by absolute resolved path.
pub struct PathLockManager {
    locks: Mutex<HashMap<PathBuf, Arc<RwLock<()>>>>,
}

impl PathLockManager {
    pub fn new() -> Self {
        Self {
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Get or create the lock for `path`.
    ///
    /// Entries nobody else holds are pruned on each call so the registry tracks only
    /// paths with live guards.
    pub fn get_lock(&self, path: &Path) -> Arc<RwLock<()>> {
        let mut map = self.locks.lock();
        map.retain(|_, lock| Arc::strong_count(lock) > 1);
        map.entry(path.to_path_buf())
            .or_insert_with(|| Arc::new(RwLock::new(())))
            .clone()
    }

    /// Number of paths currently tracked.
    pub fn tracked(&self) -> usize {
        self.locks.lock().len()
    }
}

impl Default for PathLockManager {
    fn default() -> Self {
        Self::new()
    }
}
