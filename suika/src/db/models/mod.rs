//! Database record structures matching table schemas.

pub mod user_books;
pub mod users;
