//! Product Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product token, unique within the catalog and fixed at creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductUid(String);

impl ProductUid {
    /// Wraps an existing token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the token is blank.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for ProductUid {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<String> for ProductUid {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ProductUid {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Product Model
///
/// Fields missing from persisted data load as their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub uid: ProductUid,
    pub name: String,
    pub brand: String,
    pub group: String,
    pub cost: Decimal,
    pub sell: Decimal,
    pub stock: u64,
    pub modified: String,
}

/// New Product Model
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub brand: String,
    pub group: String,
    pub cost: Decimal,
    pub sell: Decimal,
    pub stock: u64,
}

impl NewProduct {
    /// Builds the stored record.
    pub fn into_product(self, uid: ProductUid, modified: String) -> Product {
        Product {
            uid,
            name: self.name,
            brand: self.brand,
            group: self.group,
            cost: self.cost,
            sell: self.sell,
            stock: self.stock,
            modified,
        }
    }
}

/// Product Update Model
///
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub group: Option<String>,
    pub cost: Option<Decimal>,
    pub sell: Option<Decimal>,
    pub stock: Option<u64>,
}

impl ProductUpdate {
    /// Merges the set fields over `product`.
    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(brand) = self.brand {
            product.brand = brand;
        }
        if let Some(group) = self.group {
            product.group = group;
        }
        if let Some(cost) = self.cost {
            product.cost = cost;
        }
        if let Some(sell) = self.sell {
            product.sell = sell;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
    }

    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// How an imported catalog is combined with the stored one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImportMode {
    /// The imported rows become the whole catalog.
    #[default]
    Replace,

    /// Rows matching a stored uid replace that product, the rest are appended.
    Merge,
}

/// Outcome of a CSV import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Products appended to the catalog
    pub added: usize,

    /// Stored products overwritten by an imported row
    pub updated: usize,

    /// Imported rows whose uid repeated an earlier row and got a fresh token
    pub reassigned: usize,
}
