//! Database models for user-book associations.
//!
//! The feature behind this table is not built yet; the shape below is the
//! minimum needed for the reserved `user_books` schema and should not be
//! treated as final.

use sqlx::FromRow;

/// An association between a user and a book they own
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct UserBookRow {
    pub username: String,
    pub book_id: String,
}
