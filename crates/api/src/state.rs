use std::sync::Arc;

use forum_core::ranks::RankResolver;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: forum_db::DbPool,
    /// Cached rank ladder shared by every request.
    pub ranks: Arc<RankResolver>,
}
