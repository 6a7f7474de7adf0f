//! Chat handlers: send a message, clear a session, read its history.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use serde_json::{Value, json};
use uuid::Uuid;

use sunny_types::chat::{ChatReply, ChatRequest, ClearRequest, ConversationEntry};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /api/chat - Answer a message and record the exchange.
///
/// A request without `sessionId` gets a fresh one, echoed back in the reply.
pub async fn send_message(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, AppError> {
    let Json(request) = payload?;
    let message = request.message.unwrap_or_default();
    let session_id = request
        .session_id
        .unwrap_or_else(|| Uuid::now_v7().to_string());

    let reply = state.chat_service.reply(&session_id, &message)?;

    Ok(Json(ChatReply {
        message: reply,
        session_id,
    }))
}

/// POST /api/chat/clear - Forget a session's history.
///
/// Always succeeds, including for unknown or missing session ids.
pub async fn clear_session(
    State(state): State<AppState>,
    payload: Result<Json<ClearRequest>, JsonRejection>,
) -> Json<Value> {
    if let Some(session_id) = payload.ok().and_then(|Json(req)| req.session_id) {
        state.chat_service.clear(&session_id);
    }
    Json(json!({ "success": true }))
}

/// GET /api/chat/{session_id}/history - Retained exchanges, oldest first.
pub async fn session_history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Json<Vec<ConversationEntry>> {
    Json(state.chat_service.log().history(&session_id))
}
