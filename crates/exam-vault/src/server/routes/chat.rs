//! Tutor chat endpoint

use axum::{extract::State, Json};
use std::time::Instant;

use crate::error::Result;
use crate::generation;
use crate::server::state::AppState;
use crate::types::{ChatRequest, ChatResponse};

/// POST /chat - Ask the AI tutor, optionally with course context
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    let start = Instant::now();

    let response = generation::answer_query(state.questions(), state.llm(), &request).await?;

    tracing::info!(
        "Chat answered in {}ms (context: {})",
        start.elapsed().as_millis(),
        request.context_keys().is_some()
    );

    Ok(Json(ChatResponse { response }))
}
