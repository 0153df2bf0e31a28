//! Axum route handlers for the chatbot.

use std::sync::Arc;

use axum::{extract::State, Json};
use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::chatbot::replies;
use crate::chatbot::rules::route;
use crate::errors::AppError;
use crate::models::feedback::FeedbackEntry;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct ChatPage {
    pub title: &'static str,
    pub endpoint: &'static str,
    pub greeting: &'static str,
    pub suggestions: Vec<&'static str>,
}

/// Pulls `message` out of a request body. Anything unreadable counts as an empty message.
pub fn extract_message(body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| v.get("message")?.as_str().map(str::to_string))
        .unwrap_or_default()
}

/// GET /chatbot/
pub async fn handle_chat_page() -> Json<ChatPage> {
    Json(ChatPage {
        title: "Engineering Career Assistant",
        endpoint: "/api/chatbot/",
        greeting: replies::GREETING,
        suggestions: vec![
            "placement rates",
            "salary packages",
            "courses for Electronics",
            "projects for Civil",
            "compare CS and Mechanical",
            "future trends",
        ],
    })
}

/// POST /api/chatbot/
///
/// Answers from the current catalog snapshot. The exchange is written to the feedback
/// log in the background; the caller never waits on it and a failed write is only logged.
pub async fn handle_chat_message(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    let message = extract_message(&body);
    let catalog = state.store.snapshot().await?;
    let reply = route(&catalog, &message);
    debug!("Chatbot intent {:?} for {} chars of input", reply.intent, message.len());

    let store = Arc::clone(&state.store);
    let entry = FeedbackEntry::new(&message, &reply.text);
    tokio::spawn(async move {
        if let Err(e) = store.record_feedback(entry).await {
            warn!("Failed to record chatbot feedback: {e:#}");
        }
    });

    Ok(Json(ChatResponse {
        response: reply.text,
    }))
}

/// Any non-POST request to the chatbot API.
pub async fn handle_invalid_method() -> AppError {
    AppError::InvalidRequest
}
