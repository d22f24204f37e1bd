//! Repository for the `user_ranks` table.

use forum_core::types::DbId;
use sqlx::PgPool;

use crate::models::rank::UserRank;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, min_posts, color, icon, is_active, created_at, updated_at";

/// Provides read and maintenance operations for the rank ladder.
///
/// Rank administration has no HTTP surface; `list_all` and `set_active` are
/// the maintenance hooks used by operators and by the integration tests to
/// put the table into a known state.
pub struct RankRepo;

impl RankRepo {
    /// List active ranks, ordered by min_posts ascending.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<UserRank>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_ranks WHERE is_active = true ORDER BY min_posts ASC"
        );
        sqlx::query_as::<_, UserRank>(&query).fetch_all(pool).await
    }

    /// List every rank, active or not, ordered by min_posts ascending.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<UserRank>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_ranks ORDER BY min_posts ASC");
        sqlx::query_as::<_, UserRank>(&query).fetch_all(pool).await
    }

    /// Enable or disable a rank. Returns the updated row, or `None` if no
    /// rank has the given ID.
    pub async fn set_active(
        pool: &PgPool,
        id: DbId,
        is_active: bool,
    ) -> Result<Option<UserRank>, sqlx::Error> {
        let query =
            format!("UPDATE user_ranks SET is_active = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, UserRank>(&query)
            .bind(id)
            .bind(is_active)
            .fetch_optional(pool)
            .await
    }

    /// Count active users whose post count falls in `[min_posts, max_posts)`.
    /// A `None` upper bound is unbounded.
    pub async fn count_users_in_post_range(
        pool: &PgPool,
        min_posts: i64,
        max_posts: Option<i64>,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM users
             WHERE is_active = true
               AND post_count >= $1
               AND ($2::BIGINT IS NULL OR post_count < $2)",
        )
        .bind(min_posts)
        .bind(max_posts)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }
}
