//! Invoice Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::products::models::ProductUid;

/// Invoice number, increasing in creation order
pub type InvoiceId = u64;

/// Invoice Line Item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItem {
    /// Product the line refers to. Carried as given, never checked against the catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<ProductUid>,
    pub qty: u32,
    pub price: Decimal,
}

impl LineItem {
    /// Quantity times unit price, or `None` if out of range.
    pub fn amount(&self) -> Option<Decimal> {
        Decimal::from(self.qty).checked_mul(self.price)
    }
}

/// Invoice Model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Invoice {
    pub id: InvoiceId,
    pub date: String,
    pub customer_name: String,
    pub customer_mobile: String,
    pub items: Vec<LineItem>,

    /// Computed once at creation and stored.
    pub total: Decimal,
}

/// New Invoice Model
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewInvoice {
    pub customer_name: String,
    pub customer_mobile: String,
    pub items: Vec<LineItem>,
}

/// Sums the line amounts, or `None` if any step is out of range.
pub fn invoice_total(items: &[LineItem]) -> Option<Decimal> {
    items
        .iter()
        .try_fold(Decimal::ZERO, |total, item| total.checked_add(item.amount()?))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn line(qty: u32, price: Decimal) -> LineItem {
        LineItem {
            uid: None,
            qty,
            price,
        }
    }

    #[test]
    fn total_sums_quantity_times_price() {
        let items = [line(2, Decimal::from(5)), line(1, Decimal::from(3))];

        assert_eq!(invoice_total(&items), Some(Decimal::from(13)));
    }

    #[test]
    fn total_keeps_fractional_prices_exact() {
        let items = [line(3, Decimal::new(10, 2)), line(1, Decimal::new(20, 2))];

        assert_eq!(invoice_total(&items), Some(Decimal::new(50, 2)));
    }

    #[test]
    fn total_of_no_items_is_zero() {
        assert_eq!(invoice_total(&[]), Some(Decimal::ZERO));
    }

    #[test]
    fn total_overflow_is_none() {
        let items = [line(u32::MAX, Decimal::MAX)];

        assert_eq!(invoice_total(&items), None);
    }

    #[test]
    fn invoice_uses_camel_case_fields() -> TestResult {
        let invoice: Invoice = serde_json::from_str(
            r#"{"id":4,"date":"d","customerName":"Ann","customerMobile":"555",
                "items":[{"uid":"a1","qty":2,"price":5}],"total":10}"#,
        )?;

        assert_eq!(invoice.id, 4);
        assert_eq!(invoice.customer_name, "Ann");
        assert_eq!(invoice.customer_mobile, "555");
        assert_eq!(
            invoice.items,
            vec![LineItem {
                uid: Some(ProductUid::new("a1")),
                qty: 2,
                price: Decimal::from(5),
            }]
        );
        assert_eq!(invoice.total, Decimal::from(10));

        let json = serde_json::to_value(&invoice)?;

        assert!(json.get("customerName").is_some());
        assert!(json.get("customer_name").is_none());

        Ok(())
    }
}
