//! Test context for service-level tests.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use crate::{
    clock::Clock,
    invoices::LocalInvoicesService,
    products::LocalProductsService,
    storage::{ListStore, MemoryStore, Slot, SlotHandle},
    tokens::TokenGenerator,
};

/// Hands out `uid-1`, `uid-2`, ... or a fixed script, repeating its last entry.
#[derive(Debug, Default)]
pub(crate) struct ScriptedTokens {
    script: Vec<String>,
    next: AtomicUsize,
}

impl TokenGenerator for ScriptedTokens {
    fn generate(&self) -> String {
        let call = self.next.fetch_add(1, Ordering::Relaxed);

        if self.script.is_empty() {
            return format!("uid-{}", call + 1);
        }

        self.script
            .get(call)
            .or_else(|| self.script.last())
            .cloned()
            .unwrap_or_default()
    }
}

/// Returns `t1`, `t2`, ... on successive calls.
#[derive(Debug, Default)]
pub(crate) struct TickingClock {
    ticks: AtomicUsize,
}

impl Clock for TickingClock {
    fn now(&self) -> String {
        format!("t{}", self.ticks.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

pub(crate) struct TestContext {
    pub store: Arc<MemoryStore>,
    pub products: LocalProductsService,
    pub invoices: LocalInvoicesService,
}

impl TestContext {
    pub fn new() -> Self {
        Self::build(MemoryStore::new(), ScriptedTokens::default())
    }

    pub fn with_store(store: MemoryStore) -> Self {
        Self::build(store, ScriptedTokens::default())
    }

    pub fn with_tokens<const N: usize>(script: [&str; N]) -> Self {
        Self::build(
            MemoryStore::new(),
            ScriptedTokens {
                script: script.iter().map(ToString::to_string).collect(),
                next: AtomicUsize::new(0),
            },
        )
    }

    fn build(store: MemoryStore, tokens: ScriptedTokens) -> Self {
        let store = Arc::new(store);
        let shared: Arc<dyn ListStore> = store.clone();
        let clock: Arc<dyn Clock> = Arc::new(TickingClock::default());

        Self {
            products: LocalProductsService::new(
                SlotHandle::new(Arc::clone(&shared), Slot::Products),
                Arc::new(tokens),
                Arc::clone(&clock),
            ),
            invoices: LocalInvoicesService::new(SlotHandle::new(shared, Slot::Invoices), clock),
            store,
        }
    }
}
