use std::str::FromStr;

use clap::Args;
use rust_decimal::Decimal;
use stockbook::{
    context::AppContext,
    invoices::models::{LineItem, NewInvoice},
    products::models::ProductUid,
};

use crate::cli::table;

#[derive(Debug, Args)]
pub(crate) struct CreateInvoiceArgs {
    /// Customer name
    #[arg(long)]
    customer_name: String,

    /// Customer mobile number
    #[arg(long, default_value = "")]
    customer_mobile: String,

    /// Line item as QTY:PRICE or QTY:PRICE:UID, repeatable
    #[arg(long = "item", value_name = "QTY:PRICE[:UID]")]
    items: Vec<ItemArg>,
}

/// A line item given on the command line.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ItemArg(LineItem);

impl FromStr for ItemArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');

        let (Some(qty), Some(price)) = (parts.next(), parts.next()) else {
            return Err(format!("expected QTY:PRICE[:UID], got {s:?}"));
        };

        let qty = qty
            .trim()
            .parse::<u32>()
            .map_err(|error| format!("invalid quantity {qty:?}: {error}"))?;
        let price = Decimal::from_str(price.trim())
            .map_err(|error| format!("invalid price {price:?}: {error}"))?;
        let uid = parts
            .next()
            .map(str::trim)
            .filter(|uid| !uid.is_empty())
            .map(ProductUid::new);

        Ok(Self(LineItem { uid, qty, price }))
    }
}

pub(crate) fn run(args: CreateInvoiceArgs, app: &AppContext) -> Result<(), String> {
    let invoice = app
        .invoices
        .create_invoice(NewInvoice {
            customer_name: args.customer_name,
            customer_mobile: args.customer_mobile,
            items: args.items.into_iter().map(|ItemArg(item)| item).collect(),
        })
        .map_err(|error| format!("failed to create invoice: {error}"))?;

    println!("id: {}", invoice.id);
    println!("date: {}", invoice.date);
    println!("{}", table::invoice_lines(&invoice));

    Ok(())
}
