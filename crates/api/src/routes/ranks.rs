//! Route definitions for the rank ladder.

use axum::routing::get;
use axum::Router;

use crate::handlers::ranks;
use crate::state::AppState;

/// Rank ladder routes, registered as `/ranks`.
///
/// ```text
/// GET    /            list_ranks (?post_count=N | ?include_counts=true)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(ranks::list_ranks))
}

/// User-scoped rank routes, registered as `/users`.
///
/// ```text
/// GET    /{id}/rank   get_user_rank
/// ```
pub fn user_router() -> Router<AppState> {
    Router::new().route("/{id}/rank", get(ranks::get_user_rank))
}
