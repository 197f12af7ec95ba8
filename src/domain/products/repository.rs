//! Products Repository
//!
//! Operates on a catalog already loaded from its slot. The service owns loading and saving.

use crate::domain::products::models::{Product, ProductUid, ProductUpdate};

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ProductsRepository;

impl ProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn get_product<'p>(
        &self,
        products: &'p [Product],
        uid: &ProductUid,
    ) -> Option<&'p Product> {
        products.iter().find(|product| product.uid == *uid)
    }

    pub(crate) fn contains(&self, products: &[Product], uid: &ProductUid) -> bool {
        self.get_product(products, uid).is_some()
    }

    pub(crate) fn create_product(&self, products: &mut Vec<Product>, product: Product) -> Product {
        products.push(product.clone());

        product
    }

    pub(crate) fn update_product(
        &self,
        products: &mut [Product],
        uid: &ProductUid,
        update: ProductUpdate,
        modified: String,
    ) -> Option<Product> {
        let product = products.iter_mut().find(|product| product.uid == *uid)?;

        update.apply(product);
        product.modified = modified;

        Some(product.clone())
    }

    pub(crate) fn change_stock(
        &self,
        products: &mut [Product],
        uid: &ProductUid,
        delta: i64,
        modified: String,
    ) -> Option<Product> {
        let product = products.iter_mut().find(|product| product.uid == *uid)?;

        product.stock = product.stock.saturating_add_signed(delta);
        product.modified = modified;

        Some(product.clone())
    }

    /// Removes every product with `uid`, returning how many were removed.
    pub(crate) fn delete_product(&self, products: &mut Vec<Product>, uid: &ProductUid) -> usize {
        let before = products.len();

        products.retain(|product| product.uid != *uid);

        before - products.len()
    }
}
