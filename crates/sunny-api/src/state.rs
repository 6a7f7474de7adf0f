//! Application state shared by the CLI and the HTTP server.
//!
//! `AppState` owns the loaded catalog, the chat service (responder plus
//! conversation log), and the resolved configuration.

use std::sync::Arc;

use sunny_core::catalog::Catalog;
use sunny_core::chat::{ChatService, ConversationLog};
use sunny_core::responder::Responder;
use sunny_types::config::SunnyConfig;

/// Central application state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub chat_service: Arc<ChatService>,
    pub config: Arc<SunnyConfig>,
}

impl AppState {
    /// Load the catalog named by `config` and wire up the chat service.
    ///
    /// A missing or unreadable catalog file falls back to the built-in
    /// catalog, so startup never fails here.
    pub async fn init(config: SunnyConfig) -> Self {
        let catalog = sunny_infra::catalog::load_catalog(&config.catalog.path).await;
        Self::new(catalog, config)
    }

    /// Build state around an already loaded catalog.
    pub fn new(catalog: Catalog, config: SunnyConfig) -> Self {
        let log = ConversationLog::new(config.chat.history_limit);
        let chat_service = ChatService::new(Responder::new(), log);

        tracing::info!(
            products = catalog.all_products().len(),
            faqs = catalog.all_faqs().len(),
            history_limit = chat_service.log().limit(),
            "AppState initialized"
        );

        Self {
            catalog: Arc::new(catalog),
            chat_service: Arc::new(chat_service),
            config: Arc::new(config),
        }
    }
}
