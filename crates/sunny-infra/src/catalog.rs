//! JSON file catalog source.
//!
//! Reads `{"products": [...], "faqs": [...]}` from disk. Callers go through
//! `Catalog::load_or_default`, which swaps in the built-in catalog when this
//! source fails.

use std::path::PathBuf;

use sunny_core::catalog::{Catalog, CatalogSource};
use sunny_types::catalog::CatalogData;
use sunny_types::error::CatalogError;

/// Catalog stored as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for JsonFileCatalog {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<CatalogData, CatalogError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::Read(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

/// Load the catalog at `path`, falling back to the built-in one.
pub async fn load_catalog(path: impl Into<PathBuf>) -> Catalog {
    Catalog::load_or_default(&JsonFileCatalog::new(path)).await
}
