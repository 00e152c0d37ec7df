use std::{cell::RefCell, collections::BTreeMap};

use super::{ObjectStore, StoreError, StoreResult};

/// In-process object store. Single-threaded, like the rest of the core.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: RefCell<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object(self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.objects.borrow_mut().insert(path.into(), bytes.into());
        self
    }

    /// Object content as UTF-8, for assertions.
    pub fn read_string(&self, path: &str) -> Option<String> {
        self.objects
            .borrow()
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

impl ObjectStore for MemoryStore {
    fn list_files(&self, dir: &str) -> StoreResult<Vec<String>> {
        let prefix = match dir.trim_end_matches('/') {
            "" => String::new(),
            dir => format!("{}/", dir),
        };
        Ok(self
            .objects
            .borrow()
            .keys()
            .filter(|path| path.starts_with(&prefix))
            .cloned()
            .collect())
    }

    fn exists(&self, path: &str) -> StoreResult<bool> {
        Ok(self.objects.borrow().contains_key(path))
    }

    fn read(&self, path: &str) -> StoreResult<Vec<u8>> {
        self.objects
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(path.to_string()))
    }

    fn write(&self, path: &str, bytes: &[u8]) -> StoreResult<()> {
        if path.is_empty() {
            return Err(StoreError::InvalidPath(path.to_string()));
        }
        self.objects
            .borrow_mut()
            .insert(path.to_string(), bytes.to_vec());
        Ok(())
    }

    fn delete(&self, path: &str) -> StoreResult<()> {
        self.objects
            .borrow_mut()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(path.to_string()))
    }
}
