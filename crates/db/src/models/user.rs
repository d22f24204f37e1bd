//! User entity model and DTOs.
//!
//! Only the columns rank resolution needs are modelled.

use forum_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub post_count: i64,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert payload for [`crate::repositories::UserRepo::create`]. Users are
/// owned by the wider forum; this crate only creates them to seed fixtures.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub post_count: Option<i64>,
    pub is_active: Option<bool>,
}
