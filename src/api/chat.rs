use super::error::ApiResult;
use super::json_body::JsonBody;
use super::AppState;
use crate::models::{ChatRequest, ChatResponse};
use axum::{extract::State, Json};

/// `POST /chat`
pub async fn chat(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    tracing::info!(
        conversation_id = request.conversation_id.as_deref().unwrap_or("-"),
        has_image = request.image.is_some(),
        "Handling chat request"
    );

    let response = state
        .pipeline
        .get_response(&request.message, request.conversation_id)
        .await?;

    Ok(Json(response))
}
