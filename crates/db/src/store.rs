//! PostgreSQL-backed [`RankStore`].

use async_trait::async_trait;
use forum_core::error::CoreError;
use forum_core::ranks::{RankDefinition, RankStore};

use crate::repositories::RankRepo;
use crate::DbPool;

/// Reads the rank ladder and per-range user counts through [`RankRepo`].
#[derive(Debug, Clone)]
pub struct PgRankStore {
    pool: DbPool,
}

impl PgRankStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn store_error(err: sqlx::Error) -> CoreError {
    CoreError::Internal(format!("Rank store query failed: {err}"))
}

#[async_trait]
impl RankStore for PgRankStore {
    async fn list_active_ranks(&self) -> Result<Vec<RankDefinition>, CoreError> {
        let rows = RankRepo::list_active(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(rows.into_iter().map(RankDefinition::from).collect())
    }

    async fn count_users_in_post_range(
        &self,
        min_posts: i64,
        max_posts_exclusive: Option<i64>,
    ) -> Result<i64, CoreError> {
        RankRepo::count_users_in_post_range(&self.pool, min_posts, max_posts_exclusive)
            .await
            .map_err(store_error)
    }
}
