//! Repository for the `users` table.

use sqlx::PgPool;
use tarjama_core::types::DbId;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, display_name, role, is_active, created_at";

/// Provides lookups against the identity mirror.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, display_name, role)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.display_name)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Find a user by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Of the given ids, return those that do NOT name an active user with
    /// the translator role. Used to fail packet creation with a precise
    /// not-found before anything is persisted.
    pub async fn missing_translators(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<DbId>, sqlx::Error> {
        let found: Vec<DbId> = sqlx::query_scalar(
            "SELECT id FROM users
             WHERE id = ANY($1) AND role = 'translator' AND is_active",
        )
        .bind(ids)
        .fetch_all(pool)
        .await?;

        Ok(ids.iter().copied().filter(|id| !found.contains(id)).collect())
    }
}
