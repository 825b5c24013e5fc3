use axum::extract::State;
use axum::{routing::get, Json, Router};
use scriptline_db::TableCounts;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Rows currently held per table, reported as top-level fields.
    #[serde(flatten)]
    pub tables: TableCounts,
}

/// GET /health -- returns service status and table sizes.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let tables = state.dataset.read().await.counts();

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        tables,
    })
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
