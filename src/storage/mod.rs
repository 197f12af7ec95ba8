//! Persistent list slots
//!
//! Each [`Slot`] holds one ordered list of records, stored as JSON text in a [`ListStore`].
//! [`SlotHandle`] is the typed view the repositories work through: every operation loads the
//! whole list, changes it and saves the whole list back.

use std::{
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    io,
    marker::PhantomData,
    sync::Arc,
};

use mockall::automock;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, warn};

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Named persisted list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Product catalog
    Products,

    /// Invoice ledger
    Invoices,
}

impl Slot {
    /// Storage key for the slot.
    pub const fn key(self) -> &'static str {
        match self {
            Slot::Products => "bw_products",
            Slot::Invoices => "bw_invoices",
        }
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.key())
    }
}

/// Slot storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing storage failed
    #[error("slot storage is not accessible: {0}")]
    Io(#[from] io::Error),

    /// The records could not be encoded
    #[error("failed to encode slot contents: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Raw text storage for slots.
#[automock]
pub trait ListStore: Send + Sync {
    /// Returns the text stored under `slot`, or `None` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be read.
    fn read(&self, slot: Slot) -> Result<Option<String>, StoreError>;

    /// Replaces the text stored under `slot`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be written.
    fn write(&self, slot: Slot, contents: &str) -> Result<(), StoreError>;
}

/// Typed handle to one slot of a shared store.
pub struct SlotHandle<T> {
    store: Arc<dyn ListStore>,
    slot: Slot,
    records: PhantomData<fn() -> T>,
}

impl<T> SlotHandle<T> {
    /// Creates a handle to `slot` in `store`.
    pub fn new(store: Arc<dyn ListStore>, slot: Slot) -> Self {
        Self {
            store,
            slot,
            records: PhantomData,
        }
    }

    /// The slot this handle reads and writes.
    pub fn slot(&self) -> Slot {
        self.slot
    }
}

impl<T> SlotHandle<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Loads the full list.
    ///
    /// Absent, unreadable or undecodable contents all load as an empty list.
    pub fn load(&self) -> Vec<T> {
        let text = match self.store.read(self.slot) {
            Ok(Some(text)) => text,
            Ok(None) => {
                debug!(slot = %self.slot, "slot is empty");

                return Vec::new();
            }
            Err(error) => {
                warn!(slot = %self.slot, %error, "slot could not be read, loading as empty");

                return Vec::new();
            }
        };

        serde_json::from_str(&text).unwrap_or_else(|error| {
            warn!(slot = %self.slot, %error, "slot contents are not a record list, loading as empty");

            Vec::new()
        })
    }

    /// Replaces the full list.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be encoded or the store rejects the write.
    pub fn save(&self, records: &[T]) -> Result<(), StoreError> {
        let text = serde_json::to_string(records)?;

        self.store.write(self.slot, &text)?;

        debug!(slot = %self.slot, records = records.len(), "slot saved");

        Ok(())
    }
}

impl<T> Clone for SlotHandle<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            slot: self.slot,
            records: PhantomData,
        }
    }
}

impl<T> Debug for SlotHandle<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("SlotHandle")
            .field("slot", &self.slot)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;

    use serde::Deserialize;
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        name: String,
    }

    fn handle(store: MemoryStore) -> SlotHandle<Record> {
        SlotHandle::new(Arc::new(store), Slot::Products)
    }

    #[test]
    fn slot_keys_match_persisted_layout() {
        assert_eq!(Slot::Products.key(), "bw_products");
        assert_eq!(Slot::Invoices.key(), "bw_invoices");
    }

    #[test]
    fn load_absent_slot_is_empty() {
        assert!(handle(MemoryStore::new()).load().is_empty());
    }

    #[test]
    fn load_corrupt_slot_is_empty() {
        let store = MemoryStore::new().with_contents(Slot::Products, "{not json");

        assert!(handle(store).load().is_empty());
    }

    #[test]
    fn load_wrong_shape_is_empty() {
        let store = MemoryStore::new().with_contents(Slot::Products, r#"{"name":"x"}"#);

        assert!(handle(store).load().is_empty());
    }

    #[test]
    fn load_read_failure_is_empty() {
        let mut store = MockListStore::new();

        store
            .expect_read()
            .returning(|_| Err(io::Error::from(ErrorKind::PermissionDenied).into()));

        let handle: SlotHandle<Record> = SlotHandle::new(Arc::new(store), Slot::Invoices);

        assert!(handle.load().is_empty());
    }

    #[test]
    fn save_then_load_preserves_order() -> TestResult {
        let handle = handle(MemoryStore::new());
        let records = vec![
            Record {
                name: "first".to_string(),
            },
            Record {
                name: "second".to_string(),
            },
        ];

        handle.save(&records)?;

        assert_eq!(handle.load(), records);

        Ok(())
    }

    #[test]
    fn save_fully_replaces_previous_contents() -> TestResult {
        let handle = handle(MemoryStore::new());

        handle.save(&[Record {
            name: "old".to_string(),
        }])?;
        handle.save(&[])?;

        assert!(handle.load().is_empty());

        Ok(())
    }

    #[test]
    fn save_propagates_write_failure() {
        let mut store = MockListStore::new();

        store
            .expect_write()
            .returning(|_, _| Err(io::Error::from(ErrorKind::StorageFull).into()));

        let handle: SlotHandle<Record> = SlotHandle::new(Arc::new(store), Slot::Products);

        assert!(matches!(handle.save(&[]), Err(StoreError::Io(_))));
    }
}
