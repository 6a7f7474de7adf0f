//! Configuration types for the Sunny Sips service.
//!
//! `SunnyConfig` represents the top-level `sunny.toml`. Every section and
//! field has a default, so an empty file (or no file) is a valid config.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SunnyConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub web: WebConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Where the product/FAQ catalog is read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

fn default_catalog_path() -> String {
    "data/products.json".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// Conversation log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Number of exchanges kept per session (oldest evicted first).
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

/// Exchanges kept per session when nothing else is configured.
pub const DEFAULT_HISTORY_LIMIT: usize = 5;

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
        }
    }
}

/// Static chat UI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    /// Directory holding `index.html` and the UI assets.
    #[serde(default = "default_web_dir")]
    pub dir: String,
}

fn default_web_dir() -> String {
    "static".to_string()
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            dir: default_web_dir(),
        }
    }
}
