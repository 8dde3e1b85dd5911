//! Database repository for user-book associations.
//!
//! Placeholder: the feature has no requirements yet, so nothing here is wired
//! into the HTTP layer. The interface will be redesigned when the book
//! feature is specified; do not build on the current shape.

use crate::db::{
    errors::Result,
    models::user_books::UserBookRow,
};
use sqlx::SqliteConnection;

pub struct UserBooks<'c> {
    #[allow(dead_code)]
    db: &'c mut SqliteConnection,
}

impl<'c> UserBooks<'c> {
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }

    /// The insert statement has not been written yet, so nothing is persisted
    /// and this always reports that no record was created.
    pub async fn create(&mut self, _user_book: &UserBookRow) -> Result<bool> {
        // TODO(book-feature): write the INSERT once the book entity is specified.
        Ok(false)
    }

    pub async fn list(&mut self) -> Result<Vec<UserBookRow>> {
        Err(anyhow::anyhow!("listing user books is not implemented").into())
    }
}
