//! Handlers for the `/movies` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use scriptline_core::types::DbId;
use scriptline_db::models::movie::{MovieDetail, MovieListItem, MovieListParams};
use scriptline_db::repositories::MovieRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /movies/{movie_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<Json<MovieDetail>> {
    let data = state.dataset.read().await;
    let movie = MovieRepo::detail(&data, movie_id)?;
    Ok(Json(movie))
}

/// GET /movies?name=&sort=&limit=&offset=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<MovieListParams>,
) -> AppResult<Json<Vec<MovieListItem>>> {
    let page = state.config.page(params.limit, params.offset);
    let data = state.dataset.read().await;
    let items = MovieRepo::list(&data, &params, page);
    tracing::debug!(
        count = items.len(),
        limit = page.limit,
        offset = page.offset,
        "Listed movies"
    );
    Ok(Json(items))
}
