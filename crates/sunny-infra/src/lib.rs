//! Infrastructure layer for the Sunny Sips support chat.
//!
//! Contains the filesystem-backed implementations behind `sunny-core`:
//! the JSON catalog source and the TOML config loader.

pub mod catalog;
pub mod config;
