//! Stockbook Domain Concerns

pub mod invoices;
pub mod products;
