//! Handlers for conversations.
//!
//! Appends are nested under their movie:
//! `/movies/{movie_id}/conversations`
//!
//! Line listing lives at `/conversations/{id}/lines`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use scriptline_core::types::DbId;
use scriptline_db::models::conversation::{
    ConversationCreated, ConversationLines, CreateConversation,
};
use scriptline_db::models::movie::MovieConversation;
use scriptline_db::repositories::{ConversationRepo, MovieRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// POST /movies/{movie_id}/conversations
///
/// Holds the write lock for the whole append: the request is validated and
/// given ids, both tables are written to disk, and only then is the
/// in-memory dataset updated. A failure at any step leaves both untouched.
pub async fn create(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
    Json(input): Json<CreateConversation>,
) -> AppResult<(StatusCode, Json<ConversationCreated>)> {
    let mut data = state.dataset.write().await;

    let pending = ConversationRepo::prepare(&data, movie_id, &input)?;
    state.storage.persist_conversation(&data, &pending).await?;

    let conversation_id = pending.conversation.id;
    let lines = pending.lines.len();
    data.apply(pending);

    tracing::info!(movie_id, conversation_id, lines, "Conversation appended");
    Ok((StatusCode::CREATED, Json(ConversationCreated { conversation_id })))
}

/// GET /movies/{movie_id}/conversations
pub async fn list_by_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<Json<Vec<MovieConversation>>> {
    let data = state.dataset.read().await;
    Ok(Json(MovieRepo::conversations(&data, movie_id)?))
}

/// GET /conversations/{id}/lines
pub async fn list_lines(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ConversationLines>> {
    let data = state.dataset.read().await;
    Ok(Json(ConversationRepo::lines(&data, id)?))
}
