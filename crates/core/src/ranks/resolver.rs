//! Cached rank resolution.
//!
//! [`RankResolver`] owns a TTL cache of the rank table. The table is fetched
//! lazily from its [`RankStore`] on first use and again after expiry or
//! [`RankResolver::clear_cache`]. Store failures never reach the caller: the
//! default ladder (or a zero user count) is served instead.
//!
//! The cache lock is not held across the store query. Two callers racing past
//! an expired entry may both query the store; each overwrites the slot with an
//! equivalent table and the last writer's expiry wins.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::ranks::store::{RankSource, RankStore, StoreFetch};
use crate::ranks::table::RankTable;
use crate::ranks::types::{RankDefinition, RankProgress, RankWithUserCount};
use crate::types::Timestamp;

/// How long a fetched rank table is served before re-querying the store.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(600); // 10 minutes

/// A populated cache slot.
#[derive(Debug, Clone)]
struct CachedTable {
    table: Arc<RankTable>,
    source: RankSource,
    expires_at: Timestamp,
}

impl CachedTable {
    fn is_fresh(&self, now: Timestamp) -> bool {
        now < self.expires_at
    }
}

/// Resolves post counts to ranks against a cached, store-backed ladder.
pub struct RankResolver {
    store: Arc<dyn RankStore>,
    ttl: Duration,
    cache: RwLock<Option<CachedTable>>,
}

impl RankResolver {
    /// Create a resolver with the default 10 minute cache TTL.
    pub fn new(store: Arc<dyn RankStore>) -> Self {
        Self {
            store,
            ttl: DEFAULT_CACHE_TTL,
            cache: RwLock::new(None),
        }
    }

    /// Override the cache TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The current rank table, from cache when fresh.
    pub async fn rank_table(&self) -> Arc<RankTable> {
        self.rank_table_with_source().await.0
    }

    /// The current rank table together with where it came from.
    pub async fn rank_table_with_source(&self) -> (Arc<RankTable>, RankSource) {
        let now = Utc::now();
        if let Some(cached) = self.cache.read().await.as_ref() {
            if cached.is_fresh(now) {
                return (Arc::clone(&cached.table), cached.source);
            }
        }

        let (table, source) = StoreFetch::from_store(self.store.as_ref())
            .await
            .into_table();
        let table = Arc::new(table);

        let fetched_at = Utc::now();
        let expires_at = self.expiry_from(fetched_at);
        *self.cache.write().await = Some(CachedTable {
            table: Arc::clone(&table),
            source,
            expires_at,
        });

        tracing::debug!(
            ?source,
            ranks = table.len(),
            %expires_at,
            "Rank table cache refreshed"
        );

        (table, source)
    }

    /// Drop the cached table so the next lookup re-queries the store.
    pub async fn clear_cache(&self) {
        *self.cache.write().await = None;
        tracing::debug!("Rank table cache cleared");
    }

    /// Resolve the tier a user with `post_count` posts holds.
    pub async fn resolve_rank(&self, post_count: i64) -> RankDefinition {
        self.rank_table().await.resolve(post_count).clone()
    }

    /// Resolve the current tier and progress toward the next one.
    pub async fn resolve_rank_with_progress(&self, post_count: i64) -> RankProgress {
        self.rank_table().await.resolve_with_progress(post_count)
    }

    /// Every tier with the number of active users currently holding it.
    ///
    /// A failed count query yields 0 for that tier only.
    pub async fn ranks_with_user_counts(&self) -> Vec<RankWithUserCount> {
        let table = self.rank_table().await;
        let mut counted = Vec::with_capacity(table.len());

        for (rank, min_posts, max_posts) in table.post_ranges() {
            let user_count = match self
                .store
                .count_users_in_post_range(min_posts, max_posts)
                .await
            {
                Ok(count) => count,
                Err(err) => {
                    tracing::warn!(
                        rank = %rank.name,
                        error = %err,
                        "Failed to count users for rank, reporting 0"
                    );
                    0
                }
            };
            counted.push(RankWithUserCount {
                rank: rank.clone(),
                user_count,
            });
        }

        counted
    }

    fn expiry_from(&self, now: Timestamp) -> Timestamp {
        chrono::Duration::from_std(self.ttl)
            .ok()
            .and_then(|ttl| now.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
