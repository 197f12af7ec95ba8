//! Directory-backed slot storage

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::storage::{ListStore, Slot, StoreError};

/// Stores each slot as `<key>.json` inside a directory.
///
/// Writes go to a sibling temporary file first and are renamed into place.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the slot files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `slot`.
    pub fn slot_path(&self, slot: Slot) -> PathBuf {
        self.dir.join(format!("{}.json", slot.key()))
    }
}

impl ListStore for FileStore {
    fn read(&self, slot: Slot) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.slot_path(slot)) {
            Ok(text) => Ok(Some(text)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn write(&self, slot: Slot, contents: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;

        let path = self.slot_path(slot);
        let staging = self.dir.join(format!("{}.json.tmp", slot.key()));

        fs::write(&staging, contents)?;
        fs::rename(&staging, &path)?;

        debug!(path = %path.display(), bytes = contents.len(), "slot file written");

        Ok(())
    }
}
