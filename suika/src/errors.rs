use crate::db::errors::DbError;
use crate::validation::ValidationFailure;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// One or more fields in the request payload failed validation
    #[error("Validation failed")]
    Validation { failures: Vec<ValidationFailure> },

    /// Requested resource not found
    #[error("{resource} {key} not found")]
    NotFound { resource: &'static str, key: String },

    /// Database operation error
    #[error(transparent)]
    Database(#[from] DbError),

    /// Unexpected error with full context chain
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// A duplicate username is reported in the same structured shape as a
    /// field validation failure, so clients handle both identically.
    pub fn username_conflict() -> Self {
        Error::Validation {
            failures: vec![ValidationFailure::new(
                "username",
                "This username already exists",
            )],
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation { .. } => StatusCode::BAD_REQUEST,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Database(db_err) => match db_err {
                DbError::NotFound => StatusCode::NOT_FOUND,
                DbError::UniqueViolation { .. } => StatusCode::BAD_REQUEST,
                DbError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Log full error details here - the response body must not leak them
        match &self {
            Error::Database(DbError::Other(_)) | Error::Other(_) => {
                tracing::error!("Internal service error: {:#}", self);
            }
            Error::Database(_) => {
                tracing::warn!("Database constraint error: {}", self);
            }
            Error::Validation { .. } | Error::NotFound { .. } => {
                tracing::debug!("Client error: {}", self);
            }
        }

        let status = self.status_code();

        match self {
            Error::Validation { failures } => {
                (status, axum::response::Json(failures)).into_response()
            }
            // A unique violation that escapes the handlers gets the same
            // field-failure shape as a handled conflict
            Error::Database(DbError::UniqueViolation { .. }) => {
                Error::username_conflict().into_response()
            }
            // Not-found responses have an empty body
            Error::NotFound { .. } | Error::Database(DbError::NotFound) => {
                status.into_response()
            }
            _ => (status, "Internal server error").into_response(),
        }
    }
}

/// Type alias for service operation results
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_maps_to_bad_request_with_username_field() {
        let err = Error::username_conflict();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        match err {
            Error::Validation { failures } => {
                assert_eq!(failures.len(), 1);
                assert_eq!(failures[0].field, "username");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn faults_map_to_internal_server_error() {
        let err = Error::Other(anyhow::anyhow!("connection refused"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn missing_rows_map_to_not_found() {
        let err = Error::NotFound {
            resource: "user",
            key: "alice".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
