//! Value types for the rank ladder.

use serde::{Deserialize, Serialize};

/// One tier in the rank ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankDefinition {
    pub name: String,
    /// Post count at or above which a user qualifies for this tier.
    pub min_posts: i64,
    pub color: String,
    pub icon: String,
}

impl RankDefinition {
    pub fn new(
        name: impl Into<String>,
        min_posts: i64,
        color: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            min_posts,
            color: color.into(),
            icon: icon.into(),
        }
    }
}

/// A user's position on the ladder: current tier, next tier and how far along
/// they are between the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankProgress {
    pub current: RankDefinition,
    pub next: Option<RankDefinition>,
    /// Integer percentage in `[0, 100]`.
    pub progress: i32,
    pub posts_to_next_rank: i64,
}

/// A tier augmented with the number of active users currently holding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankWithUserCount {
    #[serde(flatten)]
    pub rank: RankDefinition,
    pub user_count: i64,
}

/// Badge-ready projection of a tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankDisplay {
    pub name: String,
    pub color: String,
    pub icon: String,
    pub min_posts: i64,
    /// `"{icon} {name}"`.
    pub badge: String,
}
