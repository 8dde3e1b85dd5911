//! Repository implementations for CRUD operations.
//!
//! Each repository borrows a [`sqlx::SqliteConnection`] for the duration of
//! one logical operation; connections come from the shared pool and return to
//! it when the borrow ends.

pub mod user_books;
pub mod users;

pub use user_books::UserBooks;
pub use users::Users;
