//! User rank ladder (forum post-count milestones).
//!
//! - [`types`]: rank definitions and the derived progress/display payloads
//! - [`table`]: the validated, ordered rank table and the pure resolution logic
//! - [`store`]: the persistence seam the resolver reads rank rows through
//! - [`resolver`]: the cached resolver handlers call into

pub mod resolver;
pub mod store;
pub mod table;
pub mod types;

pub use resolver::{RankResolver, DEFAULT_CACHE_TTL};
pub use store::{RankSource, RankStore, StoreFetch};
pub use table::{format_for_display, RankTable};
pub use types::{RankDefinition, RankDisplay, RankProgress, RankWithUserCount};
