//! Shared domain types for the Sunny Sips support chat.
//!
//! Products, FAQ entries, conversation entries, configuration, and the
//! error enums shared by the core, infra, and API crates.
//!
//! Zero infrastructure dependencies -- only serde, chrono, rust_decimal, thiserror.

pub mod catalog;
pub mod chat;
pub mod config;
pub mod error;
