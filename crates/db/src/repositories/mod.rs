//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod rank_repo;
pub mod user_repo;

pub use rank_repo::RankRepo;
pub use user_repo::UserRepo;
