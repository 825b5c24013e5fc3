use axum::extract::{Path, Query, State};
use axum::Json;
use scriptline_core::types::DbId;
use scriptline_db::models::line::{LineDetail, LineListParams};
use scriptline_db::repositories::LineRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /lines/{line_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(line_id): Path<DbId>,
) -> AppResult<Json<LineDetail>> {
    let data = state.dataset.read().await;
    Ok(Json(LineRepo::detail(&data, line_id)?))
}

/// GET /lines?movie_id=&conversation_id=&character=&text=&sort=&limit=&offset=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<LineListParams>,
) -> AppResult<Json<Vec<LineDetail>>> {
    let page = state.config.page(params.limit, params.offset);
    let data = state.dataset.read().await;
    let items = LineRepo::list(&data, &params, page);
    tracing::debug!(
        count = items.len(),
        limit = page.limit,
        offset = page.offset,
        "Listed lines"
    );
    Ok(Json(items))
}
