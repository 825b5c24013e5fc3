pub mod character;
pub mod conversation;
pub mod health;
pub mod line;
pub mod movie;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /characters                          list
/// /characters/{id}                     get (with top conversation partners)
///
/// /movies                              list
/// /movies/{movie_id}                   get (with top characters)
/// /movies/{movie_id}/conversations     list, append (GET, POST)
///
/// /lines                               list
/// /lines/{line_id}                     get
///
/// /conversations/{id}/lines            lines in the order spoken
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/characters", character::router())
        .nest("/movies", movie::router())
        .nest("/lines", line::router())
        .nest("/conversations", conversation::router())
}
