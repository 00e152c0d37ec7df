use std::{
    fs, io,
    path::{Component, Path, PathBuf},
};

use walkdir::WalkDir;

use super::{ObjectStore, StoreError, StoreResult};

/// Object store rooted at a directory on the local filesystem.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// reader never observes a half-written collection.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map an object path to a filesystem path, refusing anything that could
    /// escape the root.
    fn resolve(&self, path: &str) -> StoreResult<PathBuf> {
        let relative = Path::new(path);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if path.is_empty() || escapes {
            return Err(StoreError::InvalidPath(path.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

impl ObjectStore for LocalStore {
    fn list_files(&self, dir: &str) -> StoreResult<Vec<String>> {
        let base = if dir.is_empty() {
            self.root.clone()
        } else {
            self.resolve(dir)?
        };
        if !base.is_dir() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&base).follow_links(true) {
            let entry = entry.map_err(|e| {
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("filesystem loop detected"));
                StoreError::io(dir, source)
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            let object_path = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            files.push(object_path);
        }
        files.sort();
        Ok(files)
    }

    fn exists(&self, path: &str) -> StoreResult<bool> {
        Ok(self.resolve(path)?.is_file())
    }

    fn read(&self, path: &str) -> StoreResult<Vec<u8>> {
        let full = self.resolve(path)?;
        fs::read(&full).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound(path.to_string()),
            _ => StoreError::io(path, e),
        })
    }

    fn write(&self, path: &str, bytes: &[u8]) -> StoreResult<()> {
        let full = self.resolve(path)?;
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(path, e))?;
        }

        let mut tmp_name = full.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp = PathBuf::from(tmp_name);
        fs::write(&tmp, bytes).map_err(|e| StoreError::io(path, e))?;
        fs::rename(&tmp, &full).map_err(|e| StoreError::io(path, e))
    }

    fn delete(&self, path: &str) -> StoreResult<()> {
        let full = self.resolve(path)?;
        fs::remove_file(&full).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound(path.to_string()),
            _ => StoreError::io(path, e),
        })
    }
}
