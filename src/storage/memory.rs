//! In-memory slot storage

use std::sync::{Mutex, PoisonError};

use rustc_hash::FxHashMap;

use crate::storage::{ListStore, Slot, StoreError};

/// Keeps slot text in process memory. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<FxHashMap<Slot, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds `slot` with raw text.
    #[must_use]
    pub fn with_contents(self, slot: Slot, contents: impl Into<String>) -> Self {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(slot, contents.into());

        self
    }

    /// Raw text currently stored under `slot`.
    pub fn contents(&self, slot: Slot) -> Option<String> {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&slot)
            .cloned()
    }
}

impl ListStore for MemoryStore {
    fn read(&self, slot: Slot) -> Result<Option<String>, StoreError> {
        Ok(self.contents(slot))
    }

    fn write(&self, slot: Slot, contents: &str) -> Result<(), StoreError> {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(slot, contents.to_string());

        Ok(())
    }
}
