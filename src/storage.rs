//! Key/value persistence for application state.
//!
//! Values are opaque strings (JSON documents in practice). [`FileStorage`]
//! keeps one file per key under a data directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage io error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid storage key: '{0}'")]
    InvalidKey(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

pub trait Storage {
    /// Read the value stored under `key`, `None` when absent
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Directory backed storage: `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// The directory is created lazily on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => {
                log::debug!("Read {} bytes from {}", contents.len(), path.display());
                Ok(Some(contents))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path(key)?;
        let io_err = |source| StorageError::Io {
            key: key.to_string(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(io_err)?;
        // write a sibling file then rename over the old blob
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(io_err)?;
        fs::rename(&tmp, &path).map_err(io_err)?;
        log::debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

/// In-memory storage for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
