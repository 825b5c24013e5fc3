//! Route definitions for the `/lines` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::line;
use crate::state::AppState;

/// Routes mounted at `/lines`.
///
/// ```text
/// GET    /             -> list
/// GET    /{line_id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(line::list))
        .route("/{line_id}", get(line::get_by_id))
}
