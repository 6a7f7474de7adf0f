//! Business logic for the Sunny Sips support chat.
//!
//! This crate owns the keyword responder, the per-session conversation log,
//! and the in-memory catalog store. It defines the `CatalogSource` port that
//! `sunny-infra` implements -- it never depends on `sunny-infra` or any IO crate.

pub mod catalog;
pub mod chat;
pub mod responder;
