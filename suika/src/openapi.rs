//! OpenAPI documentation for the user API.
//!
//! Served interactively at `/docs` only when `docs.enabled` is set - the
//! production configuration leaves it off.

use crate::api::models::users::{UserResponse, UserWrite};
use crate::validation::ValidationFailure;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Suika User API",
        description = "CRUD operations over the user directory"
    ),
    paths(
        crate::api::handlers::users::root,
        crate::api::handlers::users::list_users,
        crate::api::handlers::users::get_user,
        crate::api::handlers::users::create_user,
        crate::api::handlers::users::update_user,
        crate::api::handlers::users::delete_user,
    ),
    components(schemas(UserWrite, UserResponse, ValidationFailure)),
    tags(
        (name = "users", description = "User management"),
        (name = "meta", description = "Service metadata"),
    )
)]
pub struct ApiDoc;
