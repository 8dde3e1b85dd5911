//! HTTP request handlers for all API endpoints.
//!
//! Each handler is responsible for:
//! - Request deserialization and field validation
//! - Business logic execution via database repositories
//! - Response serialization and status code mapping
//!
//! Handlers return [`crate::errors::Error`] which converts to the appropriate
//! HTTP status code and body via `IntoResponse`.

pub mod users;
