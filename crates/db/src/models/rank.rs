//! Rank ladder entity model.

use forum_core::ranks::RankDefinition;
use forum_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `user_ranks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserRank {
    pub id: DbId,
    pub name: String,
    pub min_posts: i64,
    pub color: String,
    pub icon: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<UserRank> for RankDefinition {
    fn from(row: UserRank) -> Self {
        RankDefinition {
            name: row.name,
            min_posts: row.min_posts,
            color: row.color,
            icon: row.icon,
        }
    }
}
