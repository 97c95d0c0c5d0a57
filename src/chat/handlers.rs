use axum::{extract::State, routing::post, Json, Router};
use tracing::instrument;

use crate::{
    chat::dto::{ChatRequest, ChatResponse},
    error::AppError,
    extract::ValidJson,
    state::AppState,
};

pub fn chat_routes() -> Router<AppState> {
    Router::new().route("/chat", post(chat))
}

#[instrument(skip(state, payload))]
pub async fn chat(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = payload.validate()?;
    let reply = state.chat.complete(&message).await?;

    Ok(Json(reply.into()))
}
