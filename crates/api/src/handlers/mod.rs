//! Request handlers.
//!
//! Each submodule provides async handler functions for one feature area.
//! Handlers delegate to `forum_core` / `forum_db` and map errors via
//! [`crate::error::AppError`].

pub mod ranks;
