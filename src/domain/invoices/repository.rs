//! Invoices Repository

use tracing::warn;

use crate::domain::invoices::models::{Invoice, InvoiceId};

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct InvoicesRepository;

impl InvoicesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// One past the highest stored id, or 1 for an empty ledger.
    ///
    /// Returns `None` once the id space is used up.
    pub(crate) fn next_id(&self, invoices: &[Invoice]) -> Option<InvoiceId> {
        let Some(highest) = invoices.iter().map(|invoice| invoice.id).max() else {
            return Some(1);
        };

        if invoices.last().map(|invoice| invoice.id) != Some(highest) {
            warn!(highest, "invoice ledger is not in id order");
        }

        highest.checked_add(1)
    }

    pub(crate) fn get_invoice<'i>(
        &self,
        invoices: &'i [Invoice],
        id: InvoiceId,
    ) -> Option<&'i Invoice> {
        invoices.iter().find(|invoice| invoice.id == id)
    }

    pub(crate) fn create_invoice(&self, invoices: &mut Vec<Invoice>, invoice: Invoice) -> Invoice {
        invoices.push(invoice.clone());

        invoice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(id: InvoiceId) -> Invoice {
        Invoice {
            id,
            ..Invoice::default()
        }
    }

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(InvoicesRepository::new().next_id(&[]), Some(1));
    }

    #[test]
    fn next_id_follows_highest() {
        let invoices = [invoice(1), invoice(2), invoice(7)];

        assert_eq!(InvoicesRepository::new().next_id(&invoices), Some(8));
    }

    #[test]
    fn next_id_uses_maximum_not_last_entry() {
        let invoices = [invoice(9), invoice(3)];

        assert_eq!(InvoicesRepository::new().next_id(&invoices), Some(10));
    }

    #[test]
    fn next_id_is_none_when_exhausted() {
        assert_eq!(
            InvoicesRepository::new().next_id(&[invoice(InvoiceId::MAX)]),
            None
        );
    }

    #[test]
    fn get_invoice_finds_by_id() {
        let invoices = [invoice(1), invoice(2)];
        let repository = InvoicesRepository::new();

        assert_eq!(repository.get_invoice(&invoices, 2), Some(&invoice(2)));
        assert_eq!(repository.get_invoice(&invoices, 5), None);
    }
}
