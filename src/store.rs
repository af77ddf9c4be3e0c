// src/store.rs
//
// Blob store keyed by path. The cache and the exporters only talk to this
// trait; `FsStore` is the real thing, `MemStore` backs tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

pub trait BlobStore {
    fn exists(&self, path: &Path) -> bool;
    fn read(&self, path: &Path) -> Result<String, StoreError>;
    /// Create or overwrite. The parent directory must exist (see `mkdir`).
    fn write(&self, path: &Path, contents: &str) -> Result<(), StoreError>;
    /// Create `path` and any missing parents. No-op if it already exists.
    fn mkdir(&self, path: &Path) -> Result<(), StoreError>;
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io { path: path.to_path_buf(), source }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FsStore;

impl BlobStore for FsStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read(&self, path: &Path) -> Result<String, StoreError> {
        fs::read_to_string(path).map_err(io_err(path))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), StoreError> {
        fs::write(path, contents).map_err(io_err(path))
    }

    fn mkdir(&self, path: &Path) -> Result<(), StoreError> {
        if path.exists() && !path.is_dir() {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::AlreadyExists,
                    "path exists but is not a directory",
                ),
            });
        }
        fs::create_dir_all(path).map_err(io_err(path))
    }
}

/// In-memory store. Enforces the same "parent must exist" rule as the
/// filesystem so lazy directory creation is observable in tests.
#[derive(Debug, Default)]
pub struct MemStore {
    files: RefCell<BTreeMap<PathBuf, String>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
    writes: RefCell<usize>,
}

impl MemStore {
    pub fn new() -> Self { Self::default() }

    pub fn has_dir(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path)
    }

    /// Number of successful `write` calls so far.
    pub fn write_count(&self) -> usize { *self.writes.borrow() }

    /// Seed a file directly, creating its parent.
    pub fn put(&self, path: impl Into<PathBuf>, contents: &str) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.dirs.borrow_mut().insert(parent.to_path_buf());
        }
        self.files.borrow_mut().insert(path, s!(contents));
    }
}

impl BlobStore for MemStore {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path) || self.dirs.borrow().contains(path)
    }

    fn read(&self, path: &Path) -> Result<String, StoreError> {
        self.files.borrow().get(path).cloned().ok_or_else(|| StoreError::Io {
            path: path.to_path_buf(),
            source: std::io::ErrorKind::NotFound.into(),
        })
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), StoreError> {
        let parent_ok = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => self.dirs.borrow().contains(p),
            _ => true,
        };
        if !parent_ok {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source: std::io::ErrorKind::NotFound.into(),
            });
        }
        self.files.borrow_mut().insert(path.to_path_buf(), s!(contents));
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn mkdir(&self, path: &Path) -> Result<(), StoreError> {
        let mut dirs = self.dirs.borrow_mut();
        for anc in path.ancestors() {
            if !anc.as_os_str().is_empty() {
                dirs.insert(anc.to_path_buf());
            }
        }
        Ok(())
    }
}
