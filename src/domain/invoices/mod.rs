//! Invoices

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub use errors::InvoicesServiceError;
pub use service::*;
