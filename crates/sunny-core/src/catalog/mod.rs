//! In-memory product and FAQ catalog.
//!
//! The catalog is built once at startup and is read-only afterwards. Loading
//! never fails from the caller's point of view: if the configured source is
//! missing or malformed, the built-in default catalog is used instead.

pub mod defaults;
pub mod source;

use std::collections::HashSet;

use sunny_types::catalog::{CatalogData, FaqEntry, Product};
use sunny_types::error::CatalogError;

pub use defaults::default_catalog_data;
pub use source::CatalogSource;

/// Immutable product and FAQ store.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    faqs: Vec<FaqEntry>,
}

impl Catalog {
    /// Build a catalog, keeping the first product for each id.
    pub fn new(products: Vec<Product>, faqs: Vec<FaqEntry>) -> Self {
        let mut seen = HashSet::new();
        let products = products
            .into_iter()
            .filter(|p| {
                let fresh = seen.insert(p.id.clone());
                if !fresh {
                    tracing::warn!(id = %p.id, "Duplicate product id in catalog, keeping the first");
                }
                fresh
            })
            .collect();
        Self { products, faqs }
    }

    /// The built-in default catalog.
    pub fn builtin() -> Self {
        Self::from(default_catalog_data())
    }

    /// Load from `source`, falling back to the built-in catalog on any error.
    pub async fn load_or_default<S: CatalogSource>(source: &S) -> Self {
        match source.load().await {
            Ok(data) => {
                let catalog = Self::from(data);
                tracing::info!(
                    source = %source.describe(),
                    products = catalog.products.len(),
                    faqs = catalog.faqs.len(),
                    "Catalog loaded"
                );
                catalog
            }
            Err(err) => {
                tracing::warn!(
                    source = %source.describe(),
                    "Failed to load catalog ({err}), using built-in defaults"
                );
                Self::builtin()
            }
        }
    }

    /// Every product, in catalog order.
    pub fn all_products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by its exact id.
    pub fn product_by_id(&self, id: &str) -> Result<&Product, CatalogError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))
    }

    /// Case-insensitive substring search over name, description, and tags.
    ///
    /// An absent or empty query returns the whole catalog, order preserved.
    pub fn search(&self, query: Option<&str>) -> Vec<&Product> {
        match query {
            None | Some("") => self.products.iter().collect(),
            Some(q) => {
                let needle = q.to_lowercase();
                self.products.iter().filter(|p| p.matches(&needle)).collect()
            }
        }
    }

    /// Every FAQ entry, in catalog order.
    pub fn all_faqs(&self) -> &[FaqEntry] {
        &self.faqs
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl From<CatalogData> for Catalog {
    fn from(data: CatalogData) -> Self {
        Self::new(data.products, data.faqs)
    }
}
