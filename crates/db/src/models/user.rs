//! User model: a minimal mirror of the identity service's directory.
//!
//! Passwords and sessions live with the external identity service; this
//! table exists so rosters and review records have referential integrity
//! and so translator lookups can fail with a proper not-found.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tarjama_core::types::{DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub display_name: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub display_name: String,
    pub role: String,
}
