//! HTTP/REST API layer for the Sunny Sips support chat.
//!
//! Axum-based JSON API under `/api/`, a `/health` check, and static serving
//! of the chat UI with an `index.html` fallback.

pub mod error;
pub mod handlers;
pub mod router;
