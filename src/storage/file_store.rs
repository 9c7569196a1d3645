//! File-backed key-value store with atomic writes
//!
//! Each key maps to one file under the store directory. Writes go to a
//! temporary file first and are renamed into place, so a file is either
//! completely written or not modified at all.

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::config::TrackerPaths;
use crate::error::{TrackerError, TrackerResult};

use super::KeyValueStore;

/// Key-value store keeping one file per key under a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the default data directory
    pub fn open_default() -> TrackerResult<Self> {
        let paths = TrackerPaths::new()?;
        paths.ensure_directories()?;
        Ok(Self {
            dir: paths.data_dir(),
        })
    }

    /// Create a store rooted at an explicit directory (useful for testing)
    pub fn open(dir: impl Into<PathBuf>) -> TrackerResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|e| TrackerError::Storage(format!("Failed to create store directory: {}", e)))?;
        Ok(Self { dir })
    }

    /// The directory this store keeps its files in
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        let mut file = File::open(&path).map_err(|e| {
            TrackerError::Storage(format!("Failed to open {}: {}", path.display(), e))
        })?;
        let mut value = String::new();
        file.read_to_string(&mut value).map_err(|e| {
            TrackerError::Storage(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Ok(Some(value))
    }

    fn set(&mut self, key: &str, value: &str) -> TrackerResult<()> {
        let path = self.path_for(key);

        // Temp file in the same directory (important for atomic rename)
        let temp_path = path.with_extension("tmp");

        let file = File::create(&temp_path)
            .map_err(|e| TrackerError::Storage(format!("Failed to create temp file: {}", e)))?;

        let mut writer = BufWriter::new(file);
        writer
            .write_all(value.as_bytes())
            .map_err(|e| TrackerError::Storage(format!("Failed to write data: {}", e)))?;
        writer
            .flush()
            .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))?;

        // Sync to disk before rename
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| TrackerError::Storage(format!("Failed to sync data: {}", e)))?;

        fs::rename(&temp_path, &path).map_err(|e| {
            // Try to clean up the temp file if rename fails
            let _ = fs::remove_file(&temp_path);
            TrackerError::Storage(format!("Failed to rename temp file: {}", e))
        })?;

        Ok(())
    }

    fn remove(&mut self, key: &str) -> TrackerResult<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                TrackerError::Storage(format!("Failed to remove {}: {}", path.display(), e))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::DATA_KEY;
    use tempfile::TempDir;

    #[test]
    fn test_missing_key_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_dir.path()).unwrap();
        assert!(store.get(DATA_KEY).unwrap().is_none());
    }

    #[test]
    fn test_set_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::open(temp_dir.path()).unwrap();

        store.set(DATA_KEY, "[]").unwrap();
        assert_eq!(store.get(DATA_KEY).unwrap().as_deref(), Some("[]"));

        store.set(DATA_KEY, "[1]").unwrap();
        assert_eq!(store.get(DATA_KEY).unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::open(temp_dir.path()).unwrap();

        store.set(DATA_KEY, "value").unwrap();

        assert!(temp_dir.path().join(DATA_KEY).exists());
        let leftovers: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_remove() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::open(temp_dir.path()).unwrap();

        store.set(DATA_KEY, "value").unwrap();
        store.remove(DATA_KEY).unwrap();
        assert!(store.get(DATA_KEY).unwrap().is_none());
        // Removing a missing key is fine
        store.remove(DATA_KEY).unwrap();
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        {
            let mut store = FileStore::open(temp_dir.path()).unwrap();
            store.set(DATA_KEY, "persisted").unwrap();
        }

        let store = FileStore::open(temp_dir.path()).unwrap();
        assert_eq!(store.get(DATA_KEY).unwrap().as_deref(), Some("persisted"));
    }
}
