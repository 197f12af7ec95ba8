//! App Context

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    path::PathBuf,
    sync::Arc,
};

use crate::{
    clock::{Clock, SystemClock},
    invoices::{InvoicesService, LocalInvoicesService},
    products::{LocalProductsService, ProductsService},
    storage::{FileStore, ListStore, Slot, SlotHandle},
    tokens::{RandomTokens, TokenGenerator},
};

/// Services sharing one store.
#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub invoices: Arc<dyn InvoicesService>,
}

impl AppContext {
    /// Build application context over slot files in `dir`.
    pub fn from_data_dir(dir: impl Into<PathBuf>) -> Self {
        Self::from_store(Arc::new(FileStore::new(dir)))
    }

    /// Build application context over `store` with random tokens and the system clock.
    pub fn from_store(store: Arc<dyn ListStore>) -> Self {
        Self::with_capabilities(store, Arc::new(RandomTokens), Arc::new(SystemClock))
    }

    /// Build application context from explicit capabilities.
    pub fn with_capabilities(
        store: Arc<dyn ListStore>,
        tokens: Arc<dyn TokenGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            products: Arc::new(LocalProductsService::new(
                SlotHandle::new(Arc::clone(&store), Slot::Products),
                tokens,
                Arc::clone(&clock),
            )),
            invoices: Arc::new(LocalInvoicesService::new(
                SlotHandle::new(store, Slot::Invoices),
                clock,
            )),
        }
    }
}

impl Debug for AppContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
