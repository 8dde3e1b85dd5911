//! Database repository for users.

use crate::db::{
    errors::{DbError, Result},
    models::users::{UserCreateDBRequest, UserRow, UserUpdateDBRequest},
};
use chrono::Utc;
use sqlx::SqliteConnection;
use tracing::instrument;

pub struct Users<'c> {
    db: &'c mut SqliteConnection,
}

/// Escape `%` and `_` so a search term is matched literally inside a LIKE
/// pattern. `\` itself must be escaped first.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

impl<'c> Users<'c> {
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }

    /// Every user, in whatever order the database returns them.
    #[instrument(skip(self), err)]
    pub async fn list(&mut self) -> Result<Vec<UserRow>> {
        let users = sqlx::query_as::<_, UserRow>(
            "SELECT username, display_name, created_at, updated_at FROM users",
        )
        .fetch_all(&mut *self.db)
        .await?;

        Ok(users)
    }

    /// Users whose username contains `term`, case-insensitively.
    ///
    /// Callers are expected to fall back to [`Users::list`] for blank terms
    /// rather than passing them here.
    #[instrument(skip(self), err)]
    pub async fn search(&mut self, term: &str) -> Result<Vec<UserRow>> {
        let pattern = format!("%{}%", escape_like(term));
        let users = sqlx::query_as::<_, UserRow>(
            "SELECT username, display_name, created_at, updated_at FROM users
             WHERE username LIKE ?1 ESCAPE '\\'",
        )
        .bind(pattern)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(users)
    }

    /// Exact-match lookup. Absence is `Ok(None)`, not an error.
    #[instrument(skip(self), err)]
    pub async fn get(&mut self, username: &str) -> Result<Option<UserRow>> {
        let user = sqlx::query_as::<_, UserRow>(
            "SELECT username, display_name, created_at, updated_at FROM users WHERE username = ?1",
        )
        .bind(username)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(user)
    }

    /// Insert a new user. Returns `Ok(false)` only when the username already
    /// exists: the unique violation is identified by the structured database
    /// error code, so any other insert failure still propagates as a fault.
    #[instrument(skip(self, request), fields(username = %request.username), err)]
    pub async fn create(&mut self, request: &UserCreateDBRequest) -> Result<bool> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO users (username, display_name, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&request.username)
        .bind(&request.display_name)
        .bind(now)
        .bind(now)
        .execute(&mut *self.db)
        .await;

        match result {
            Ok(_) => Ok(true),
            Err(err) => match DbError::from(err) {
                DbError::UniqueViolation { .. } => Ok(false),
                other => Err(other),
            },
        }
    }

    /// Full-record replace keyed by username. Returns `Ok(false)` when no row
    /// matched.
    #[instrument(skip(self, request), fields(username = %request.username), err)]
    pub async fn update(&mut self, request: &UserUpdateDBRequest) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE users SET display_name = ?1, updated_at = ?2 WHERE username = ?3",
        )
        .bind(&request.display_name)
        .bind(Utc::now())
        .bind(&request.username)
        .execute(&mut *self.db)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Returns `Ok(false)` when there was nothing to delete.
    #[instrument(skip(self), err)]
    pub async fn delete(&mut self, username: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE username = ?1")
            .bind(username)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
