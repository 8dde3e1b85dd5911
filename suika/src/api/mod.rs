//! API layer for HTTP request handling and data models.
//!
//! - **[`handlers`]**: Axum route handlers
//! - **[`models`]**: Request/response data structures
//!
//! Endpoints are documented with OpenAPI annotations via `utoipa`; the
//! interactive docs are served at `/docs` when enabled in configuration.

pub mod handlers;
pub mod models;
