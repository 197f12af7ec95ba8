use clap::Args;
use stockbook::{context::AppContext, invoices::models::InvoiceId};

use crate::cli::table;

#[derive(Debug, Args)]
pub(crate) struct ShowInvoiceArgs {
    /// Invoice number
    id: InvoiceId,
}

pub(crate) fn run(args: &ShowInvoiceArgs, app: &AppContext) -> Result<(), String> {
    let invoice = app
        .invoices
        .get_invoice(args.id)
        .map_err(|error| format!("failed to show invoice {}: {error}", args.id))?;

    println!("id: {}", invoice.id);
    println!("date: {}", invoice.date);
    println!("customer: {} ({})", invoice.customer_name, invoice.customer_mobile);
    println!("{}", table::invoice_lines(&invoice));
    println!("total: {}", invoice.total);

    Ok(())
}
