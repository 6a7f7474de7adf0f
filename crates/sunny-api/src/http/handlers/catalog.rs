//! Product and FAQ handlers.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use sunny_types::catalog::{FaqEntry, Product};

use crate::http::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// GET /api/products - Full product list in catalog order.
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog.all_products().to_vec())
}

/// GET /api/products/search?q= - Case-insensitive substring search over
/// name, description, and tags. An empty or absent query returns everything.
pub async fn search_products(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<Vec<Product>>, AppError> {
    let Query(query) = query?;
    let matches = state.catalog.search(query.q.as_deref());
    Ok(Json(matches.into_iter().cloned().collect()))
}

/// GET /api/products/{id} - One product, or 404.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    let product = state.catalog.product_by_id(&id)?;
    Ok(Json(product.clone()))
}

/// GET /api/faqs
pub async fn list_faqs(State(state): State<AppState>) -> Json<Vec<FaqEntry>> {
    Json(state.catalog.all_faqs().to_vec())
}
