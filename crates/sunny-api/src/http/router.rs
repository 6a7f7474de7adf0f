//! Axum router configuration with middleware.
//!
//! All API routes are under `/api/`, with `/health` at the root.
//! Middleware: CORS, tracing, panic recovery.
//!
//! The chat UI is served from `web.dir` (default `static/`). API routes take
//! priority; unknown paths fall through to `index.html`. If the directory
//! does not exist, only the API is served.

use std::path::Path;

use axum::Router;
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::error::panic_response;
use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Chat
        .route("/chat", post(handlers::chat::send_message))
        .route("/chat/clear", post(handlers::chat::clear_session))
        .route(
            "/chat/{session_id}/history",
            get(handlers::chat::session_history),
        )
        // Catalog
        .route("/products", get(handlers::catalog::list_products))
        .route("/products/search", get(handlers::catalog::search_products))
        .route("/products/{id}", get(handlers::catalog::get_product))
        .route("/faqs", get(handlers::catalog::list_faqs))
        .fallback(handlers::not_found);

    let web_dir = state.config.web.dir.clone();

    let mut router = Router::new()
        .nest("/api", api_routes)
        .route("/health", get(handlers::health::health));

    // API routes and /health take priority; everything else falls through
    // to the UI directory, with index.html as the last resort.
    if Path::new(&web_dir).is_dir() {
        let index_path = Path::new(&web_dir).join("index.html");
        let serve_dir = ServeDir::new(&web_dir).fallback(ServeFile::new(index_path));
        router = router.fallback_service(serve_dir);
        tracing::info!(path = %web_dir, "Static UI serving enabled");
    } else {
        tracing::info!(path = %web_dir, "Static UI directory not found, serving API only");
    }

    // Layers go on last so the static fallback gets them too.
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
