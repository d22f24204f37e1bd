//! Domain logic for forum user ranks.
//!
//! Pure computation over the rank ladder plus the cached resolver that sits
//! in front of a [`ranks::store::RankStore`]. No database access lives here;
//! the `forum-db` crate provides the PostgreSQL-backed store.

pub mod error;
pub mod ranks;
pub mod types;
