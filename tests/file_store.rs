//! Integration tests for the file-backed application context

use std::fs;

use rust_decimal::Decimal;
use tempfile::tempdir;
use testresult::TestResult;

use stockbook::{
    context::AppContext,
    invoices::models::{LineItem, NewInvoice},
    products::{
        ProductsServiceError,
        models::{NewProduct, ProductUid, ProductUpdate},
    },
};

fn tea() -> NewProduct {
    NewProduct {
        name: "Tea".to_string(),
        brand: "Leafy".to_string(),
        group: "Drinks".to_string(),
        cost: Decimal::new(120, 2),
        sell: Decimal::new(250, 2),
        stock: 10,
    }
}

#[test]
fn catalog_survives_a_restart() -> TestResult {
    let dir = tempdir()?;

    let created = AppContext::from_data_dir(dir.path())
        .products
        .create_product(tea())?;

    let reopened = AppContext::from_data_dir(dir.path());

    assert_eq!(reopened.products.list_products(), vec![created.clone()]);
    assert_eq!(reopened.products.get_product(&created.uid)?, created);

    Ok(())
}

#[test]
fn slots_are_json_files_named_after_their_keys() -> TestResult {
    let dir = tempdir()?;
    let app = AppContext::from_data_dir(dir.path());

    app.products.create_product(tea())?;
    app.invoices.create_invoice(NewInvoice::default())?;

    let products: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("bw_products.json"))?)?;
    let invoices: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("bw_invoices.json"))?)?;

    assert!(products.is_array(), "expected an array, got {products}");
    assert_eq!(invoices.pointer("/0/id"), Some(&serde_json::json!(1)));

    Ok(())
}

#[test]
fn corrupt_slot_reads_as_empty_and_is_replaced_on_write() -> TestResult {
    let dir = tempdir()?;
    fs::write(dir.path().join("bw_products.json"), "{ not json")?;

    let app = AppContext::from_data_dir(dir.path());

    assert!(app.products.list_products().is_empty());

    app.products.create_product(tea())?;

    assert_eq!(
        AppContext::from_data_dir(dir.path())
            .products
            .list_products()
            .len(),
        1
    );

    Ok(())
}

#[test]
fn stock_and_updates_persist() -> TestResult {
    let dir = tempdir()?;
    let app = AppContext::from_data_dir(dir.path());

    let uid = app.products.create_product(tea())?.uid;

    app.products.change_stock(&uid, -15)?;
    app.products.update_product(
        &uid,
        ProductUpdate {
            sell: Some(Decimal::new(300, 2)),
            ..ProductUpdate::default()
        },
    )?;

    let product = AppContext::from_data_dir(dir.path())
        .products
        .get_product(&uid)?;

    assert_eq!(product.stock, 0);
    assert_eq!(product.sell, Decimal::new(300, 2));

    Ok(())
}

#[test]
fn deleting_unknown_product_reports_not_found() -> TestResult {
    let dir = tempdir()?;
    let app = AppContext::from_data_dir(dir.path());
    app.products.create_product(tea())?;

    let result = app.products.delete_product(&ProductUid::new("missing"));

    assert!(
        matches!(result, Err(ProductsServiceError::NotFound)),
        "expected NotFound, got {result:?}"
    );
    assert_eq!(app.products.list_products().len(), 1);

    Ok(())
}

#[test]
fn invoice_numbers_continue_across_restarts() -> TestResult {
    let dir = tempdir()?;

    let order = || NewInvoice {
        customer_name: "Ann".to_string(),
        customer_mobile: "0700 000000".to_string(),
        items: vec![LineItem {
            uid: None,
            qty: 2,
            price: Decimal::from(5),
        }],
    };

    let first = AppContext::from_data_dir(dir.path())
        .invoices
        .create_invoice(order())?;
    let second = AppContext::from_data_dir(dir.path())
        .invoices
        .create_invoice(order())?;

    assert_eq!((first.id, second.id), (1, 2));
    assert_eq!(second.total, Decimal::from(10));

    Ok(())
}
