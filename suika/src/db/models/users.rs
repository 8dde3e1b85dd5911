//! Database models for users.

use crate::api::models::users::UserWrite;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A persisted user record, matching the `users` table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct UserRow {
    pub username: String,
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database request for creating a new user
#[derive(Debug, Clone)]
pub struct UserCreateDBRequest {
    pub username: String,
    pub display_name: Option<String>,
}

impl From<UserWrite> for UserCreateDBRequest {
    fn from(api: UserWrite) -> Self {
        Self {
            username: api.username,
            display_name: api.display_name,
        }
    }
}

/// Database request for replacing an existing user, keyed by username
#[derive(Debug, Clone)]
pub struct UserUpdateDBRequest {
    pub username: String,
    pub display_name: Option<String>,
}

impl UserUpdateDBRequest {
    /// The username always comes from the URL, never from the request body.
    pub fn new(username: String, update: UserWrite) -> Self {
        Self {
            username,
            display_name: update.display_name,
        }
    }
}
