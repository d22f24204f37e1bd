//! Persistence seam for the rank ladder.
//!
//! The resolver never talks to the database directly; it reads through a
//! [`RankStore`]. `forum_db::PgRankStore` is the production implementation.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::CoreError;
use crate::ranks::table::RankTable;
use crate::ranks::types::RankDefinition;

/// Source of rank rows and per-tier user counts.
#[async_trait]
pub trait RankStore: Send + Sync {
    /// Active rank rows, already sorted ascending by `min_posts`.
    async fn list_active_ranks(&self) -> Result<Vec<RankDefinition>, CoreError>;

    /// Number of active users with `min_posts <= post_count < max_posts_exclusive`.
    /// `None` means unbounded above.
    async fn count_users_in_post_range(
        &self,
        min_posts: i64,
        max_posts_exclusive: Option<i64>,
    ) -> Result<i64, CoreError>;
}

/// Where the currently served rank table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankSource {
    Store,
    Default,
}

/// Outcome of reading the rank table from a store.
#[derive(Debug)]
pub enum StoreFetch {
    /// The store returned a valid, non-empty ladder.
    Rows(RankTable),
    /// The store holds no active ranks.
    Empty,
    /// The query failed or returned rows that do not form a valid ladder.
    Failed(CoreError),
}

impl StoreFetch {
    /// Read and validate the active ladder from `store`.
    pub async fn from_store(store: &dyn RankStore) -> Self {
        match store.list_active_ranks().await {
            Ok(rows) if rows.is_empty() => Self::Empty,
            Ok(rows) => match RankTable::new(rows) {
                Ok(table) => Self::Rows(table),
                Err(err) => Self::Failed(err),
            },
            Err(err) => Self::Failed(err),
        }
    }

    /// Resolve to the table to serve, substituting the default ladder for
    /// empty or failed fetches.
    pub fn into_table(self) -> (RankTable, RankSource) {
        match self {
            Self::Rows(table) => (table, RankSource::Store),
            Self::Empty => {
                tracing::debug!("No active ranks in store, using default ladder");
                (RankTable::default_ladder(), RankSource::Default)
            }
            Self::Failed(err) => {
                tracing::warn!(error = %err, "Failed to load ranks from store, using default ladder");
                (RankTable::default_ladder(), RankSource::Default)
            }
        }
    }
}
