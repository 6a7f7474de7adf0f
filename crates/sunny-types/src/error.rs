use thiserror::Error;

/// Errors related to catalog access and loading.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product '{0}' not found")]
    ProductNotFound(String),

    #[error("failed to read catalog: {0}")]
    Read(String),

    #[error("failed to parse catalog: {0}")]
    Parse(String),
}

/// Errors related to chat exchanges.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("message is required")]
    EmptyMessage,
}

/// Errors from loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(String),

    #[error("failed to parse config: {0}")]
    Parse(String),
}
