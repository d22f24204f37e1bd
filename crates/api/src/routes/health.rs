use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use forum_core::ranks::RankSource;

use crate::state::AppState;

/// Liveness payload for `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database is down or the rank ladder has
    /// fallen back to the built-in default.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Where the rank ladder currently being served came from.
    pub rank_source: RankSource,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = forum_db::health_check(&state.pool).await.is_ok();
    let (_, rank_source) = state.ranks.rank_table_with_source().await;

    let status = if db_healthy && rank_source == RankSource::Store {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        rank_source,
    })
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
