//! Table rendering for list commands.

use stockbook::{invoices::models::Invoice, products::models::Product};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

pub(crate) fn products(products: &[Product]) -> String {
    let mut builder = Builder::default();

    builder.push_record([
        "#", "UID", "Name", "Brand", "Group", "Cost", "Sell", "Stock", "Modified",
    ]);

    for (serial, product) in (1_usize..).zip(products) {
        builder.push_record([
            serial.to_string(),
            product.uid.to_string(),
            product.name.clone(),
            product.brand.clone(),
            product.group.clone(),
            product.cost.to_string(),
            product.sell.to_string(),
            product.stock.to_string(),
            product.modified.clone(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(5..8), Alignment::right());

    table.to_string()
}

pub(crate) fn invoices(invoices: &[Invoice]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["ID", "Date", "Customer", "Mobile", "Items", "Total"]);

    for invoice in invoices {
        builder.push_record([
            invoice.id.to_string(),
            invoice.date.clone(),
            invoice.customer_name.clone(),
            invoice.customer_mobile.clone(),
            invoice.items.len().to_string(),
            invoice.total.to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(4..6), Alignment::right());

    table.to_string()
}

pub(crate) fn invoice_lines(invoice: &Invoice) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Product", "Qty", "Price", "Amount"]);

    for item in &invoice.items {
        builder.push_record([
            item.uid
                .as_ref()
                .map_or_else(|| "-".to_string(), ToString::to_string),
            item.qty.to_string(),
            item.price.to_string(),
            item.amount()
                .map_or_else(|| "overflow".to_string(), |amount| amount.to_string()),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(1..4), Alignment::right());

    table.to_string()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use stockbook::{invoices::models::LineItem, products::models::ProductUid};

    use super::*;

    #[test]
    fn product_table_lists_every_product() {
        let rendered = products(&[
            Product {
                uid: ProductUid::new("a1"),
                name: "Hammer".to_string(),
                ..Product::default()
            },
            Product {
                uid: ProductUid::new("b2"),
                name: "Saw".to_string(),
                ..Product::default()
            },
        ]);

        assert!(rendered.contains("Hammer"), "missing first row:\n{rendered}");
        assert!(rendered.contains("b2"), "missing second row:\n{rendered}");
    }

    #[test]
    fn invoice_lines_show_amounts() {
        let rendered = invoice_lines(&Invoice {
            items: vec![LineItem {
                uid: None,
                qty: 2,
                price: Decimal::from(5),
            }],
            ..Invoice::default()
        });

        assert!(rendered.contains("10"), "missing amount:\n{rendered}");
    }
}
