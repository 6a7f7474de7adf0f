//! CatalogSource trait definition.

use sunny_types::catalog::CatalogData;
use sunny_types::error::CatalogError;

/// Where raw catalog data comes from.
///
/// Implementations live in sunny-infra (e.g., `JsonFileCatalog`).
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait CatalogSource: Send + Sync {
    /// Human-readable description of the source, used in log lines.
    fn describe(&self) -> String;

    /// Read and parse the catalog.
    fn load(&self) -> impl std::future::Future<Output = Result<CatalogData, CatalogError>> + Send;
}
