//! The ordered rank table and the pure resolution logic over it.
//!
//! A [`RankTable`] can only be built through [`RankTable::new`] (which
//! validates ordering and uniqueness) or [`RankTable::default_ladder`], so every
//! resolution function here can rely on a non-empty ladder starting at zero.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::CoreError;
use crate::ranks::types::{RankDefinition, RankDisplay, RankProgress};

/* --------------------------------------------------------------------------
Default ladder
-------------------------------------------------------------------------- */

/// Built-in ladder used when the store has no active rank rows.
///
/// `(name, min_posts, color, icon)`, ascending by `min_posts`.
const DEFAULT_RANKS: &[(&str, i64, &str, &str)] = &[
    ("New Member", 0, "#94a3b8", "🌱"),
    ("Member", 10, "#60a5fa", "💬"),
    ("Active Member", 50, "#34d399", "⚡"),
    ("Senior Member", 100, "#a78bfa", "🔥"),
    ("Expert", 250, "#f59e0b", "🎯"),
    ("Veteran", 500, "#f97316", "🏅"),
    ("Legend", 1000, "#ef4444", "👑"),
];

/// Progress reported once a user holds the top tier.
const MAX_PROGRESS: i32 = 100;

/* --------------------------------------------------------------------------
RankTable
-------------------------------------------------------------------------- */

/// Rank definitions ordered ascending by `min_posts`.
///
/// Invariants: non-empty, first threshold is 0, thresholds strictly
/// increasing, names unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RankTable {
    ranks: Vec<RankDefinition>,
}

impl RankTable {
    /// Validate and wrap a list of rank definitions.
    ///
    /// Rows must already be sorted ascending; out-of-order lists are rejected.
    pub fn new(ranks: Vec<RankDefinition>) -> Result<Self, CoreError> {
        let Some(first) = ranks.first() else {
            return Err(CoreError::Validation(
                "Rank table must contain at least one rank".to_string(),
            ));
        };
        if first.min_posts != 0 {
            return Err(CoreError::Validation(format!(
                "First rank '{}' must start at 0 posts (got {})",
                first.name, first.min_posts
            )));
        }

        for pair in ranks.windows(2) {
            if pair[1].min_posts <= pair[0].min_posts {
                return Err(CoreError::Validation(format!(
                    "Rank thresholds must be strictly increasing: '{}' ({}) follows '{}' ({})",
                    pair[1].name, pair[1].min_posts, pair[0].name, pair[0].min_posts
                )));
            }
        }

        let mut seen = HashSet::with_capacity(ranks.len());
        for rank in &ranks {
            if !seen.insert(rank.name.as_str()) {
                return Err(CoreError::Validation(format!(
                    "Duplicate rank name: '{}'",
                    rank.name
                )));
            }
        }

        Ok(Self { ranks })
    }

    /// The built-in seven-tier ladder.
    pub fn default_ladder() -> Self {
        Self {
            ranks: DEFAULT_RANKS
                .iter()
                .map(|&(name, min_posts, color, icon)| {
                    RankDefinition::new(name, min_posts, color, icon)
                })
                .collect(),
        }
    }

    pub fn ranks(&self) -> &[RankDefinition] {
        &self.ranks
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Never true for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Index of the highest tier whose threshold is at or below `post_count`.
    ///
    /// Linear "last qualifying" scan that stops at the first tier out of
    /// reach. Negative counts are clamped to 0 and land on the first tier.
    fn position_for(&self, post_count: i64) -> usize {
        let post_count = post_count.max(0);
        let mut position = 0;
        for (index, rank) in self.ranks.iter().enumerate() {
            if rank.min_posts <= post_count {
                position = index;
            } else {
                break;
            }
        }
        position
    }

    /// Resolve the tier a user with `post_count` posts holds.
    pub fn resolve(&self, post_count: i64) -> &RankDefinition {
        &self.ranks[self.position_for(post_count)]
    }

    /// Resolve the current tier plus progress toward the next one.
    pub fn resolve_with_progress(&self, post_count: i64) -> RankProgress {
        let post_count = post_count.max(0);
        let position = self.position_for(post_count);
        let current = &self.ranks[position];

        match self.ranks.get(position + 1) {
            Some(next) => {
                let posts_in_range = post_count - current.min_posts;
                let range_size = next.min_posts - current.min_posts;
                RankProgress {
                    current: current.clone(),
                    next: Some(next.clone()),
                    progress: percent_of(posts_in_range, range_size),
                    posts_to_next_rank: next.min_posts - post_count,
                }
            }
            None => RankProgress {
                current: current.clone(),
                next: None,
                progress: MAX_PROGRESS,
                posts_to_next_rank: 0,
            },
        }
    }

    /// Half-open post-count range `[min, next_min)` for each tier; the top
    /// tier is unbounded above.
    pub fn post_ranges(&self) -> impl Iterator<Item = (&RankDefinition, i64, Option<i64>)> {
        self.ranks.iter().enumerate().map(move |(index, rank)| {
            let upper = self.ranks.get(index + 1).map(|next| next.min_posts);
            (rank, rank.min_posts, upper)
        })
    }
}

/// Rounded integer percentage of `part / whole`, clamped to `[0, 100]`.
fn percent_of(part: i64, whole: i64) -> i32 {
    if whole <= 0 {
        return MAX_PROGRESS;
    }
    let percent = (100.0 * part as f64 / whole as f64).round();
    percent.clamp(0.0, f64::from(MAX_PROGRESS)) as i32
}

/* --------------------------------------------------------------------------
Display
-------------------------------------------------------------------------- */

/// Project a tier into its badge-ready form. `None` passes through.
pub fn format_for_display(rank: Option<&RankDefinition>) -> Option<RankDisplay> {
    rank.map(|rank| RankDisplay {
        name: rank.name.clone(),
        color: rank.color.clone(),
        icon: rank.icon.clone(),
        min_posts: rank.min_posts,
        badge: format!("{} {}", rank.icon, rank.name),
    })
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn ladder() -> RankTable {
        RankTable::default_ladder()
    }

    fn rank(name: &str, min_posts: i64) -> RankDefinition {
        RankDefinition::new(name, min_posts, "#000", "*")
    }

    // -- default ladder --

    #[test]
    fn default_ladder_is_valid() {
        let table = ladder();
        assert_eq!(table.len(), 7);
        assert!(RankTable::new(table.ranks().to_vec()).is_ok());
    }

    #[test]
    fn default_ladder_thresholds_strictly_increase() {
        let table = ladder();
        for pair in table.ranks().windows(2) {
            assert!(pair[0].min_posts < pair[1].min_posts);
        }
        assert_eq!(table.ranks()[0].min_posts, 0);
    }

    #[test]
    fn default_ladder_names_unique() {
        let table = ladder();
        let names: HashSet<_> = table.ranks().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names.len(), table.len());
    }

    // -- validation --

    #[test]
    fn empty_table_rejected() {
        assert_matches!(RankTable::new(vec![]), Err(CoreError::Validation(_)));
    }

    #[test]
    fn table_not_starting_at_zero_rejected() {
        let result = RankTable::new(vec![rank("A", 5), rank("B", 10)]);
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("must start at 0"));
    }

    #[test]
    fn unsorted_table_rejected() {
        let result = RankTable::new(vec![rank("A", 0), rank("B", 20), rank("C", 10)]);
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("strictly increasing"));
    }

    #[test]
    fn equal_thresholds_rejected() {
        assert!(RankTable::new(vec![rank("A", 0), rank("B", 10), rank("C", 10)]).is_err());
    }

    #[test]
    fn duplicate_names_rejected() {
        let result = RankTable::new(vec![rank("A", 0), rank("A", 10)]);
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("Duplicate rank name"));
    }

    // -- resolve --

    #[test]
    fn resolves_default_tiers() {
        let table = ladder();
        assert_eq!(table.resolve(0).name, "New Member");
        assert_eq!(table.resolve(10).name, "Member");
        assert_eq!(table.resolve(50).name, "Active Member");
        assert_eq!(table.resolve(100).name, "Senior Member");
        assert_eq!(table.resolve(500).name, "Veteran");
        assert_eq!(table.resolve(1000).name, "Legend");
        assert_eq!(table.resolve(10_000).name, "Legend");
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        let table = ladder();
        assert_eq!(table.resolve(99).name, "Active Member");
        assert_eq!(table.resolve(100).name, "Senior Member");
        assert_eq!(table.resolve(9).name, "New Member");
    }

    #[test]
    fn negative_count_resolves_to_lowest_tier() {
        assert_eq!(ladder().resolve(-5).name, "New Member");
    }

    #[test]
    fn resolved_tier_is_highest_qualifying() {
        let table = ladder();
        for post_count in (0..1500).step_by(7) {
            let resolved = table.resolve(post_count);
            assert!(resolved.min_posts <= post_count);
            assert!(!table
                .ranks()
                .iter()
                .any(|t| t.min_posts <= post_count && t.min_posts > resolved.min_posts));
        }
    }

    // -- resolve_with_progress --

    #[test]
    fn progress_midway_through_tier() {
        let progress = ladder().resolve_with_progress(75);
        assert_eq!(progress.current.name, "Active Member");
        assert_eq!(progress.next.as_ref().unwrap().name, "Senior Member");
        assert_eq!(progress.posts_to_next_rank, 25);
        assert_eq!(progress.progress, 50);
    }

    #[test]
    fn progress_at_tier_start_is_zero() {
        assert_eq!(ladder().resolve_with_progress(50).progress, 0);
    }

    #[test]
    fn progress_at_top_tier_is_complete() {
        let progress = ladder().resolve_with_progress(1000);
        assert!(progress.next.is_none());
        assert_eq!(progress.progress, 100);
        assert_eq!(progress.posts_to_next_rank, 0);
    }

    #[test]
    fn progress_in_first_tier() {
        let progress = ladder().resolve_with_progress(5);
        assert_eq!(progress.current.name, "New Member");
        assert_eq!(progress.next.as_ref().unwrap().name, "Member");
        assert_eq!(progress.posts_to_next_rank, 5);
        assert!(progress.progress > 0 && progress.progress < 100);
    }

    #[test]
    fn progress_rounds_to_nearest_percent() {
        // Expert (250) -> Veteran (500): 83 / 250 = 33.2%
        assert_eq!(ladder().resolve_with_progress(333).progress, 33);
        // 1 / 3 of Senior Member (100) -> Expert (250): 50 / 150 = 33.3%
        assert_eq!(ladder().resolve_with_progress(150).progress, 33);
        // 2 / 3: 100 / 150 = 66.7%
        assert_eq!(ladder().resolve_with_progress(200).progress, 67);
    }

    #[test]
    fn negative_count_progress_clamped_to_zero() {
        let progress = ladder().resolve_with_progress(-20);
        assert_eq!(progress.current.name, "New Member");
        assert_eq!(progress.progress, 0);
        assert_eq!(progress.posts_to_next_rank, 10);
    }

    #[test]
    fn single_tier_table_is_always_complete() {
        let table = RankTable::new(vec![rank("Only", 0)]).unwrap();
        let progress = table.resolve_with_progress(3);
        assert_eq!(progress.current.name, "Only");
        assert_eq!(progress.progress, 100);
        assert!(progress.next.is_none());
    }

    // -- post_ranges --

    #[test]
    fn post_ranges_are_half_open_with_unbounded_top() {
        let table = ladder();
        let ranges: Vec<_> = table.post_ranges().map(|(_, lo, hi)| (lo, hi)).collect();
        assert_eq!(ranges[0], (0, Some(10)));
        assert_eq!(ranges[3], (100, Some(250)));
        assert_eq!(ranges[6], (1000, None));
    }

    // -- format_for_display --

    #[test]
    fn format_none_is_none() {
        assert!(format_for_display(None).is_none());
    }

    #[test]
    fn format_builds_badge() {
        let rank = RankDefinition::new("Test", 10, "#000", "⭐");
        let display = format_for_display(Some(&rank)).unwrap();
        assert_eq!(display.badge, "⭐ Test");
        assert_eq!(display.name, "Test");
        assert_eq!(display.color, "#000");
        assert_eq!(display.min_posts, 10);
    }
}
