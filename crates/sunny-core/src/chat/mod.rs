//! Chat exchange handling: the per-session conversation log and the service
//! that ties the responder to it.

pub mod log;
pub mod service;

pub use log::ConversationLog;
pub use service::ChatService;
