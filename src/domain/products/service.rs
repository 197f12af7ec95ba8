//! Products service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use mockall::automock;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, info, instrument};

use crate::{
    clock::Clock,
    codec,
    domain::products::{
        errors::ProductsServiceError,
        models::{ImportMode, ImportSummary, NewProduct, Product, ProductUid, ProductUpdate},
        repository::ProductsRepository,
    },
    storage::SlotHandle,
    tokens::TokenGenerator,
};

/// Attempts at drawing a token that is not already in the catalog.
const MAX_TOKEN_ATTEMPTS: usize = 16;

/// Products service over a catalog slot.
#[derive(Clone)]
pub struct LocalProductsService {
    slot: SlotHandle<Product>,
    repository: ProductsRepository,
    tokens: Arc<dyn TokenGenerator>,
    clock: Arc<dyn Clock>,
}

impl LocalProductsService {
    #[must_use]
    pub fn new(
        slot: SlotHandle<Product>,
        tokens: Arc<dyn TokenGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            slot,
            repository: ProductsRepository::new(),
            tokens,
            clock,
        }
    }

    fn fresh_uid(
        &self,
        taken: impl Fn(&ProductUid) -> bool,
    ) -> Result<ProductUid, ProductsServiceError> {
        for _ in 0..MAX_TOKEN_ATTEMPTS {
            let uid = ProductUid::new(self.tokens.generate());

            if !uid.is_empty() && !taken(&uid) {
                return Ok(uid);
            }

            debug!(%uid, "generated token already in use, drawing again");
        }

        Err(ProductsServiceError::AlreadyExists)
    }

    fn replace_catalog(
        &self,
        decoded: Vec<Product>,
    ) -> Result<(Vec<Product>, ImportSummary), ProductsServiceError> {
        let mut summary = ImportSummary::default();
        let mut seen = FxHashSet::default();
        let mut products = Vec::with_capacity(decoded.len());

        for mut product in decoded {
            if product.uid.is_empty() {
                product.uid = self.fresh_uid(|uid| seen.contains(uid))?;
            } else if seen.contains(&product.uid) {
                product.uid = self.fresh_uid(|uid| seen.contains(uid))?;
                summary.reassigned += 1;
            }

            seen.insert(product.uid.clone());
            products.push(product);
            summary.added += 1;
        }

        Ok((products, summary))
    }

    fn merge_catalog(
        &self,
        decoded: Vec<Product>,
    ) -> Result<(Vec<Product>, ImportSummary), ProductsServiceError> {
        let mut summary = ImportSummary::default();
        let mut products = self.slot.load();
        let mut seen = FxHashSet::default();
        let mut positions: FxHashMap<ProductUid, usize> = products
            .iter()
            .enumerate()
            .map(|(position, product)| (product.uid.clone(), position))
            .collect();

        for mut product in decoded {
            let taken = |uid: &ProductUid| seen.contains(uid) || positions.contains_key(uid);

            if product.uid.is_empty() {
                product.uid = self.fresh_uid(taken)?;
            } else if seen.contains(&product.uid) {
                product.uid = self.fresh_uid(taken)?;
                summary.reassigned += 1;
            }

            seen.insert(product.uid.clone());

            match positions
                .get(&product.uid)
                .and_then(|position| products.get_mut(*position))
            {
                Some(existing) => {
                    *existing = product;
                    summary.updated += 1;
                }
                None => {
                    positions.insert(product.uid.clone(), products.len());
                    products.push(product);
                    summary.added += 1;
                }
            }
        }

        Ok((products, summary))
    }
}

impl Debug for LocalProductsService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("LocalProductsService")
            .field("slot", &self.slot)
            .finish_non_exhaustive()
    }
}

impl ProductsService for LocalProductsService {
    fn list_products(&self) -> Vec<Product> {
        self.slot.load()
    }

    fn get_product(&self, uid: &ProductUid) -> Result<Product, ProductsServiceError> {
        let products = self.slot.load();

        self.repository
            .get_product(&products, uid)
            .cloned()
            .ok_or(ProductsServiceError::NotFound)
    }

    #[instrument(skip_all, fields(name = %product.name))]
    fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        let mut products = self.slot.load();

        let uid = self.fresh_uid(|uid| self.repository.contains(&products, uid))?;
        let created = self
            .repository
            .create_product(&mut products, product.into_product(uid, self.clock.now()));

        self.slot.save(&products)?;

        info!(uid = %created.uid, "product created");

        Ok(created)
    }

    #[instrument(skip_all, fields(uid = %uid))]
    fn update_product(
        &self,
        uid: &ProductUid,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError> {
        let mut products = self.slot.load();

        let updated = self
            .repository
            .update_product(&mut products, uid, update, self.clock.now())
            .ok_or(ProductsServiceError::NotFound)?;

        self.slot.save(&products)?;

        info!("product updated");

        Ok(updated)
    }

    #[instrument(skip_all, fields(uid = %uid))]
    fn delete_product(&self, uid: &ProductUid) -> Result<(), ProductsServiceError> {
        let mut products = self.slot.load();

        let removed = self.repository.delete_product(&mut products, uid);

        if removed == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        self.slot.save(&products)?;

        info!(removed, "product deleted");

        Ok(())
    }

    #[instrument(skip_all, fields(uid = %uid))]
    fn change_stock(&self, uid: &ProductUid, delta: i64) -> Result<Product, ProductsServiceError> {
        let mut products = self.slot.load();

        let changed = self
            .repository
            .change_stock(&mut products, uid, delta, self.clock.now())
            .ok_or(ProductsServiceError::NotFound)?;

        self.slot.save(&products)?;

        info!(stock = changed.stock, "stock changed");

        Ok(changed)
    }

    fn export_csv(&self) -> Result<String, ProductsServiceError> {
        Ok(codec::encode_products(&self.slot.load())?)
    }

    #[instrument(skip_all, fields(bytes = text.len(), mode = ?mode))]
    fn import_csv(
        &self,
        text: &str,
        mode: ImportMode,
    ) -> Result<ImportSummary, ProductsServiceError> {
        let decoded = codec::decode_products(text, self.clock.as_ref());

        let (products, summary) = match mode {
            ImportMode::Replace => self.replace_catalog(decoded)?,
            ImportMode::Merge => self.merge_catalog(decoded)?,
        };

        self.slot.save(&products)?;

        info!(
            added = summary.added,
            updated = summary.updated,
            reassigned = summary.reassigned,
            "catalog imported"
        );

        Ok(summary)
    }
}

#[automock]
pub trait ProductsService: Send + Sync {
    /// Retrieves the whole catalog, in stored order.
    fn list_products(&self) -> Vec<Product>;

    /// Retrieve a single product.
    fn get_product(&self, uid: &ProductUid) -> Result<Product, ProductsServiceError>;

    /// Creates a product with a fresh uid and the current time, appended to the catalog.
    fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;

    /// Merges `update` over the product with the given uid and stamps it modified.
    fn update_product(
        &self,
        uid: &ProductUid,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError>;

    /// Removes every product with the given uid.
    fn delete_product(&self, uid: &ProductUid) -> Result<(), ProductsServiceError>;

    /// Adjusts stock by `delta`, clamping at zero.
    fn change_stock(&self, uid: &ProductUid, delta: i64) -> Result<Product, ProductsServiceError>;

    /// Encodes the catalog as CSV.
    fn export_csv(&self) -> Result<String, ProductsServiceError>;

    /// Decodes CSV rows and stores them according to `mode`.
    fn import_csv(
        &self,
        text: &str,
        mode: ImportMode,
    ) -> Result<ImportSummary, ProductsServiceError>;
}
