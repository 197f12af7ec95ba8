//! Invoices service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use mockall::automock;
use tracing::{info, instrument};

use crate::{
    clock::Clock,
    domain::invoices::{
        errors::InvoicesServiceError,
        models::{Invoice, InvoiceId, NewInvoice, invoice_total},
        repository::InvoicesRepository,
    },
    storage::SlotHandle,
};

/// Invoices service over a ledger slot. Invoices are append-only.
#[derive(Clone)]
pub struct LocalInvoicesService {
    slot: SlotHandle<Invoice>,
    repository: InvoicesRepository,
    clock: Arc<dyn Clock>,
}

impl LocalInvoicesService {
    #[must_use]
    pub fn new(slot: SlotHandle<Invoice>, clock: Arc<dyn Clock>) -> Self {
        Self {
            slot,
            repository: InvoicesRepository::new(),
            clock,
        }
    }
}

impl Debug for LocalInvoicesService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("LocalInvoicesService")
            .field("slot", &self.slot)
            .finish_non_exhaustive()
    }
}

impl InvoicesService for LocalInvoicesService {
    fn list_invoices(&self) -> Vec<Invoice> {
        self.slot.load()
    }

    fn get_invoice(&self, id: InvoiceId) -> Result<Invoice, InvoicesServiceError> {
        let invoices = self.slot.load();

        self.repository
            .get_invoice(&invoices, id)
            .cloned()
            .ok_or(InvoicesServiceError::NotFound)
    }

    #[instrument(skip_all, fields(items = invoice.items.len()))]
    fn create_invoice(&self, invoice: NewInvoice) -> Result<Invoice, InvoicesServiceError> {
        let mut invoices = self.slot.load();

        let id = self
            .repository
            .next_id(&invoices)
            .ok_or(InvoicesServiceError::IdExhausted)?;
        let total = invoice_total(&invoice.items).ok_or(InvoicesServiceError::TotalOverflow)?;

        let created = self.repository.create_invoice(
            &mut invoices,
            Invoice {
                id,
                date: self.clock.now(),
                customer_name: invoice.customer_name,
                customer_mobile: invoice.customer_mobile,
                items: invoice.items,
                total,
            },
        );

        self.slot.save(&invoices)?;

        info!(id, %total, "invoice created");

        Ok(created)
    }

    fn export_json(&self) -> Result<String, InvoicesServiceError> {
        Ok(serde_json::to_string_pretty(&self.slot.load())?)
    }
}

#[automock]
pub trait InvoicesService: Send + Sync {
    /// Retrieves every invoice, in creation order.
    fn list_invoices(&self) -> Vec<Invoice>;

    /// Retrieve a single invoice.
    fn get_invoice(&self, id: InvoiceId) -> Result<Invoice, InvoicesServiceError>;

    /// Numbers, totals, dates and appends a new invoice, returning it.
    fn create_invoice(&self, invoice: NewInvoice) -> Result<Invoice, InvoicesServiceError>;

    /// Encodes the ledger as a JSON document.
    fn export_json(&self) -> Result<String, InvoicesServiceError>;
}
