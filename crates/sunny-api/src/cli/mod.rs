//! CLI command definitions and dispatch for the `sunny` binary.
//!
//! Uses clap derive macros for argument parsing. `serve` runs the HTTP
//! server; the other commands query the catalog and responder directly.

pub mod catalog;
pub mod chat;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Sunny Sips customer support chat.
#[derive(Parser)]
#[command(name = "sunny", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the TOML config file.
    #[arg(long, global = true, env = "SUNNY_CONFIG", default_value = "sunny.toml")]
    pub config: PathBuf,

    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Export spans to stdout through OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (API plus chat UI).
    Serve {
        /// Host to bind to.
        #[arg(long, env = "HOST")]
        host: Option<String>,

        /// Port to listen on.
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Catalog JSON file.
        #[arg(long, env = "SUNNY_CATALOG")]
        catalog: Option<String>,

        /// Directory holding the chat UI.
        #[arg(long, env = "SUNNY_WEB_DIR")]
        web_dir: Option<String>,
    },

    /// Ask the support bot a single question.
    Ask {
        /// The message to send.
        message: String,
    },

    /// List products, optionally filtered by a search term.
    #[command(alias = "ls")]
    Products {
        /// Case-insensitive search over name, description, and tags.
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one product by id.
    Product {
        /// Product id (e.g. `classic-lemonade`).
        id: String,
    },

    /// List frequently asked questions.
    Faqs,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
