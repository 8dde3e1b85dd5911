//! Declarative field validation for user payloads.
//!
//! Purely structural: these checks never touch the database. Uniqueness of
//! usernames is a separate concern enforced at the repository layer.

use crate::api::models::users::UserWrite;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MAX_USERNAME_LEN: usize = 64;
pub const MAX_DISPLAY_NAME_LEN: usize = 256;

/// One failed rule, addressed to the offending field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValidationFailure {
    pub field: String,
    pub message: String,
}

impl ValidationFailure {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

fn valid_username_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}

/// Check a user payload against the write rules. An empty list means valid.
pub fn validate_user(user: &UserWrite) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();

    if user.username.is_empty() {
        failures.push(ValidationFailure::new("username", "Username is required"));
    } else {
        if user.username.len() > MAX_USERNAME_LEN {
            failures.push(ValidationFailure::new(
                "username",
                format!("Username must be at most {MAX_USERNAME_LEN} characters"),
            ));
        }
        if !user.username.chars().all(valid_username_char) {
            failures.push(ValidationFailure::new(
                "username",
                "Username may only contain letters, digits, '.', '_' and '-'",
            ));
        }
    }

    if let Some(display_name) = &user.display_name {
        if display_name.chars().count() > MAX_DISPLAY_NAME_LEN {
            failures.push(ValidationFailure::new(
                "displayName",
                format!("Display name must be at most {MAX_DISPLAY_NAME_LEN} characters"),
            ));
        }
    }

    failures
}
