use axum::routing::get;
use axum::Router;

use crate::handlers::conversation;
use crate::state::AppState;

/// Routes mounted at `/conversations`.
///
/// ```text
/// GET    /{id}/lines    -> list_lines
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}/lines", get(conversation::list_lines))
}
