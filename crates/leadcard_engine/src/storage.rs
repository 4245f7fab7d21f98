//! Key-value storage behind the persisted position and filter.
//!
//! Callers treat every store as best-effort: errors are reported so they can
//! be logged, never so they can abort the view.
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use leadcard_logging::{lead_debug, lead_warn};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("corrupt storage file {path:?}: {message}")]
    Corrupt { path: PathBuf, message: String },
    #[error("failed to serialize storage: {0}")]
    Serialize(String),
}

/// String key-value storage in the shape of browser `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-process store; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct StoreFile {
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

/// Store backed by a RON map on disk. Every call reads the file so several
/// processes sharing it see each other's writes; writes replace it atomically.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(err.into()),
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        ron::from_str::<StoreFile>(&content)
            .map(|file| file.entries)
            .map_err(|err| StorageError::Corrupt {
                path: self.path.clone(),
                message: err.to_string(),
            })
    }

    /// Like `load`, but a corrupt file is replaced instead of blocking writes.
    fn load_for_write(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match self.load() {
            Err(StorageError::Corrupt { path, message }) => {
                lead_warn!("Discarding corrupt storage file {:?}: {}", path, message);
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    /// Atomic replace through a temp file in the target directory.
    fn save(&self, entries: BTreeMap<String, String>) -> Result<(), StorageError> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            Some(_) => Path::new("."),
            None => {
                return Err(StorageError::Unavailable(format!(
                    "{:?} is not a file path",
                    self.path
                )))
            }
        };
        if dir.exists() && !dir.is_dir() {
            return Err(StorageError::Unavailable(format!(
                "{dir:?} is not a directory"
            )));
        }
        fs::create_dir_all(dir)?;

        let pretty = ron::ser::PrettyConfig::new();
        let content = ron::ser::to_string_pretty(&StoreFile { entries }, pretty)
            .map_err(|err| StorageError::Serialize(err.to_string()))?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file_mut().sync_all()?;
        tmp.persist(&self.path).map_err(|err| StorageError::Io(err.error))?;
        lead_debug!("Saved storage file {:?}", self.path);
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.load_for_write()?;
        if entries.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        entries.insert(key.to_string(), value.to_string());
        self.save(entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.load_for_write()?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.save(entries)
    }
}
