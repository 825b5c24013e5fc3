//! Handlers for the `/characters` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use scriptline_core::types::DbId;
use scriptline_db::models::character::{CharacterDetail, CharacterListItem, CharacterListParams};
use scriptline_db::repositories::CharacterRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /characters/{id}
///
/// Includes the character's conversation partners ranked by the number of
/// lines exchanged.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CharacterDetail>> {
    let data = state.dataset.read().await;
    let character = CharacterRepo::detail(&data, id)?;
    Ok(Json(character))
}

/// GET /characters?name=&sort=&limit=&offset=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CharacterListParams>,
) -> AppResult<Json<Vec<CharacterListItem>>> {
    let page = state.config.page(params.limit, params.offset);
    let data = state.dataset.read().await;
    let items = CharacterRepo::list(&data, &params, page);
    tracing::debug!(
        count = items.len(),
        limit = page.limit,
        offset = page.offset,
        "Listed characters"
    );
    Ok(Json(items))
}
