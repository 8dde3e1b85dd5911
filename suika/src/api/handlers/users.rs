//! HTTP handlers for the user resource.
//!
//! Handlers parse the request, run field validation for writes, call into the
//! users repository, and map the outcome onto status codes: found maps to
//! 200/204, absent to 404, and a duplicate username to 400 with the same
//! field-failure shape as a validation error.

use crate::db::errors::DbError;
use crate::db::handlers::Users;
use crate::db::models::users::{UserCreateDBRequest, UserUpdateDBRequest};
use crate::errors::Error;
use crate::validation::validate_user;
use crate::{
    api::models::users::{ListUsersQuery, UserResponse, UserWrite},
    AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderName, StatusCode},
    Json,
};

/// Liveness greeting at the root path.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service is up", body = String)),
    tag = "meta"
)]
pub async fn root() -> &'static str {
    "Hello World!"
}

#[utoipa::path(
    get,
    path = "/users",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "All users, filtered when a search term is given", body = [UserResponse]),
    ),
    tag = "users"
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<Vec<UserResponse>>, Error> {
    let mut conn = state.db.acquire().await.map_err(DbError::from)?;
    let mut repo = Users::new(&mut conn);

    // A blank search term means "everyone"; the repository never sees it.
    let rows = match query.search_term.as_deref() {
        Some(term) if !term.trim().is_empty() => repo.search(term).await?,
        _ => repo.list().await?,
    };

    Ok(Json(rows.into_iter().map(UserResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/users/{username}",
    params(("username" = String, Path, description = "Username to look up")),
    responses(
        (status = 200, description = "The requested user", body = UserResponse),
        (status = 404, description = "No such user"),
    ),
    tag = "users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserResponse>, Error> {
    let mut conn = state.db.acquire().await.map_err(DbError::from)?;
    let mut repo = Users::new(&mut conn);

    match repo.get(&username).await? {
        Some(row) => Ok(Json(UserResponse::from(row))),
        None => Err(Error::NotFound {
            resource: "user",
            key: username,
        }),
    }
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = UserWrite,
    responses(
        (status = 201, description = "User created", body = UserResponse,
         headers(("Location" = String, description = "URL of the created user"))),
        (status = 400, description = "Validation failure or username already taken", body = [crate::validation::ValidationFailure]),
    ),
    tag = "users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(user): Json<UserWrite>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<UserResponse>), Error> {
    let failures = validate_user(&user);
    if !failures.is_empty() {
        return Err(Error::Validation { failures });
    }

    let mut conn = state.db.acquire().await.map_err(DbError::from)?;
    let mut repo = Users::new(&mut conn);

    let request = UserCreateDBRequest::from(user);
    let created = repo.create(&request).await?;
    if !created {
        return Err(Error::username_conflict());
    }

    // Read the row back so the response carries the persisted timestamps
    let row = repo
        .get(&request.username)
        .await?
        .ok_or_else(|| anyhow::anyhow!("user vanished immediately after insert"))?;

    let location = format!("/users/{}", row.username);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserResponse::from(row)),
    ))
}

#[utoipa::path(
    put,
    path = "/users/{username}",
    params(("username" = String, Path, description = "Username to replace")),
    request_body = UserWrite,
    responses(
        (status = 204, description = "User replaced"),
        (status = 400, description = "Validation failure", body = [crate::validation::ValidationFailure]),
        (status = 404, description = "No such user"),
    ),
    tag = "users"
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(mut user): Json<UserWrite>,
) -> Result<StatusCode, Error> {
    // The username in the URL is authoritative, whatever the body says
    user.username = username;

    let failures = validate_user(&user);
    if !failures.is_empty() {
        return Err(Error::Validation { failures });
    }

    let mut conn = state.db.acquire().await.map_err(DbError::from)?;
    let mut repo = Users::new(&mut conn);

    let request = UserUpdateDBRequest::new(user.username.clone(), user);
    let updated = repo.update(&request).await?;
    if !updated {
        return Err(Error::NotFound {
            resource: "user",
            key: request.username,
        });
    }

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/users/{username}",
    params(("username" = String, Path, description = "Username to delete")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "No such user"),
    ),
    tag = "users"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<StatusCode, Error> {
    let mut conn = state.db.acquire().await.map_err(DbError::from)?;
    let mut repo = Users::new(&mut conn);

    let deleted = repo.delete(&username).await?;
    if !deleted {
        return Err(Error::NotFound {
            resource: "user",
            key: username,
        });
    }

    Ok(StatusCode::NO_CONTENT)
}
