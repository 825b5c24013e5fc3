//! Route definitions for the `/movies` resource and its conversations.

use axum::routing::get;
use axum::Router;

use crate::handlers::{conversation, movie};
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET    /                               -> list
/// GET    /{movie_id}                     -> get_by_id
/// GET    /{movie_id}/conversations       -> conversation::list_by_movie
/// POST   /{movie_id}/conversations       -> conversation::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movie::list))
        .route("/{movie_id}", get(movie::get_by_id))
        .route(
            "/{movie_id}/conversations",
            get(conversation::list_by_movie).post(conversation::create),
        )
}
