pub mod health;
pub mod ranks;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ranks                   rank table, progress for a post count, or per-tier user counts
/// /users/{id}/rank         rank and progress for a single user
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/ranks", ranks::router())
        .nest("/users", ranks::user_router())
}
