//! Handlers for the rank ladder.
//!
//! Rank data comes from the shared [`forum_core::ranks::RankResolver`] in
//! [`AppState`]; only the per-user lookup touches the database directly.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use forum_core::error::CoreError;
use forum_core::ranks::{format_for_display, RankDisplay, RankProgress};
use forum_core::types::DbId;
use forum_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /ranks`.
///
/// `post_count` takes precedence over `include_counts` when both are given.
#[derive(Debug, Default, Deserialize)]
pub struct RankListParams {
    pub post_count: Option<i64>,
    pub include_counts: Option<bool>,
}

/// A user's rank with the badge ready for display.
#[derive(Debug, Serialize)]
pub struct UserRankResponse {
    pub user_id: DbId,
    pub username: String,
    pub post_count: i64,
    pub badge: Option<RankDisplay>,
    #[serde(flatten)]
    pub progress: RankProgress,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Reject negative post counts; the resolver would silently clamp them.
fn validate_post_count(post_count: i64) -> Result<(), CoreError> {
    if post_count < 0 {
        return Err(CoreError::Validation(format!(
            "post_count must be zero or greater (got {post_count})"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /ranks
///
/// - `?post_count=N`: the rank and progress for a user with N posts.
/// - `?include_counts=true`: every tier with its active user count.
/// - otherwise: the rank table in display form.
pub async fn list_ranks(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<RankListParams>,
) -> AppResult<Response> {
    if let Some(post_count) = params.post_count {
        validate_post_count(post_count)?;
        let progress = state.ranks.resolve_rank_with_progress(post_count).await;
        return Ok(Json(DataResponse { data: progress }).into_response());
    }

    if params.include_counts.unwrap_or(false) {
        let counted = state.ranks.ranks_with_user_counts().await;
        return Ok(Json(DataResponse { data: counted }).into_response());
    }

    let table = state.ranks.rank_table().await;
    let ranks: Vec<RankDisplay> = table
        .ranks()
        .iter()
        .filter_map(|rank| format_for_display(Some(rank)))
        .collect();
    Ok(Json(DataResponse { data: ranks }).into_response())
}

/// GET /users/{id}/rank
///
/// Rank, badge and progress for a single user.
pub async fn get_user_rank(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;

    let progress = state.ranks.resolve_rank_with_progress(user.post_count).await;
    let badge = format_for_display(Some(&progress.current));

    tracing::debug!(
        user_id,
        rank = %progress.current.name,
        progress = progress.progress,
        "Resolved user rank"
    );

    Ok(Json(DataResponse {
        data: UserRankResponse {
            user_id: user.id,
            username: user.username,
            post_count: user.post_count,
            badge,
            progress,
        },
    }))
}
