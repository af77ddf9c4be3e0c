// src/file.rs

use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::store::BlobStore;

/// Create `dir` (and parents) unless it's already there.
pub fn ensure_directory(store: &dyn BlobStore, dir: &Path) -> Result<(), StoreError> {
    if dir.as_os_str().is_empty() || store.exists(dir) {
        return Ok(());
    }
    logd!("Creating directory {}", dir.display());
    store.mkdir(dir)
}

/// Write one output artifact, creating its parent directory lazily.
/// Returns the path written to.
pub fn write_artifact(store: &dyn BlobStore, path: &Path, contents: &str) -> Result<PathBuf, StoreError> {
    if let Some(parent) = path.parent() {
        ensure_directory(store, parent)?;
    }
    store.write(path, contents)?;
    logf!("Wrote {}", path.display());
    Ok(path.to_path_buf())
}
