//! Object store capability backing persisted locale collections.
//!
//! Object paths are `/`-separated and relative to the store root, e.g.
//! `translations/en.json`.
//!
//! ## Implementations
//!
//! - `LocalStore`: a directory on disk
//! - `MemoryStore`: an in-process map, for tests and embedding

use std::io;

use thiserror::Error;

mod local;
mod memory;

pub use local::LocalStore;
pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Object '{0}' not found in store")]
    NotFound(String),

    #[error("Invalid object path '{0}'")]
    InvalidPath(String),

    #[error("Store I/O error on '{path}'")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Byte-level storage the locale store is built on.
pub trait ObjectStore {
    /// All object paths below `dir` (recursively), sorted. A missing directory is empty.
    fn list_files(&self, dir: &str) -> StoreResult<Vec<String>>;

    fn exists(&self, path: &str) -> StoreResult<bool>;

    fn read(&self, path: &str) -> StoreResult<Vec<u8>>;

    /// Create or fully overwrite an object.
    fn write(&self, path: &str, bytes: &[u8]) -> StoreResult<()>;

    /// Delete an object; `NotFound` if it does not exist.
    fn delete(&self, path: &str) -> StoreResult<()>;
}

impl<S: ObjectStore + ?Sized> ObjectStore for &S {
    fn list_files(&self, dir: &str) -> StoreResult<Vec<String>> {
        (**self).list_files(dir)
    }

    fn exists(&self, path: &str) -> StoreResult<bool> {
        (**self).exists(path)
    }

    fn read(&self, path: &str) -> StoreResult<Vec<u8>> {
        (**self).read(path)
    }

    fn write(&self, path: &str, bytes: &[u8]) -> StoreResult<()> {
        (**self).write(path, bytes)
    }

    fn delete(&self, path: &str) -> StoreResult<()> {
        (**self).delete(path)
    }
}

/// Join object path segments with `/`, skipping empty ones.
pub fn join_path(dir: &str, name: &str) -> String {
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", dir, name)
    }
}
