//! Stockbook
//!
//! Stockbook is a local inventory and invoicing store: a product catalog and an invoice ledger
//! persisted as two JSON slots, with CSV export and import for the catalog.

pub mod clock;
pub mod codec;
pub mod context;
pub mod domain;
pub mod download;
pub mod storage;
pub mod tokens;

pub use domain::{invoices, products};
