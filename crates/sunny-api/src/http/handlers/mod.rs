//! HTTP request handlers for the REST API.

pub mod catalog;
pub mod chat;
pub mod health;

use crate::http::error::AppError;

/// Fallback for unknown paths under `/api`.
pub async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}
