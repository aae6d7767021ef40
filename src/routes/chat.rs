use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, header::CONTENT_TYPE},
};
use tracing::{Instrument, info_span, warn};
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    let payload = parse_chat_request(&headers, &body)?;
    let message = payload.resolved_message();

    let span = info_span!("chat", request_id = %Uuid::new_v4());
    let response = state.gateway.complete(message).instrument(span).await?;

    Ok(Json(ChatResponse { response }))
}

// Non-JSON or empty bodies are treated as `{}` so the default message applies.
fn parse_chat_request(headers: &HeaderMap, body: &[u8]) -> Result<ChatRequest, AppError> {
    let is_json = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().to_ascii_lowercase().starts_with("application/json"))
        .unwrap_or(false);

    if !is_json || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ChatRequest::default());
    }

    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, "rejecting chat request body");
        AppError::BadRequest("Invalid JSON body".to_string())
    })
}
