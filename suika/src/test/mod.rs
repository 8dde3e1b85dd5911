//! End-to-end integration tests over the real router.
//!
//! Each test gets its own migrated SQLite database from the sqlx test
//! harness and talks to the service exactly as an HTTP client would.

use crate::api::models::users::UserResponse;
use crate::test_utils::create_test_app;
use crate::validation::ValidationFailure;
use sqlx::SqlitePool;

#[sqlx::test]
#[test_log::test]
async fn test_root_returns_greeting(pool: SqlitePool) {
    let server = create_test_app(pool).await;

    let response = server.get("/").await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.text(), "Hello World!");
}

#[sqlx::test]
#[test_log::test]
async fn test_create_then_fetch_round_trip(pool: SqlitePool) {
    let server = create_test_app(pool).await;

    let response = server
        .post("/users")
        .json(&serde_json::json!({"username": "alice", "displayName": "Alice B"}))
        .await;
    assert_eq!(response.status_code(), 201);
    assert_eq!(response.header("location"), "/users/alice");
    let created: UserResponse = response.json();
    assert_eq!(created.username, "alice");
    assert_eq!(created.display_name, Some("Alice B".to_string()));

    let response = server.get("/users/alice").await;
    assert_eq!(response.status_code(), 200);
    let fetched: UserResponse = response.json();
    assert_eq!(fetched.username, created.username);
    assert_eq!(fetched.display_name, created.display_name);
    assert_eq!(fetched.created_at, created.created_at);
}

#[sqlx::test]
#[test_log::test]
async fn test_duplicate_username_returns_field_error(pool: SqlitePool) {
    let server = create_test_app(pool).await;

    let response = server
        .post("/users")
        .json(&serde_json::json!({"username": "alice", "displayName": "Alice"}))
        .await;
    assert_eq!(response.status_code(), 201);

    // Case-insensitive: "ALICE" collides with "alice"
    let response = server
        .post("/users")
        .json(&serde_json::json!({"username": "ALICE", "displayName": "Impostor"}))
        .await;
    assert_eq!(response.status_code(), 400);
    let failures: Vec<ValidationFailure> = response.json();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].field, "username");

    // The first record is retrievable, unchanged
    let fetched: UserResponse = server.get("/users/alice").await.json();
    assert_eq!(fetched.display_name, Some("Alice".to_string()));
}

#[sqlx::test]
#[test_log::test]
async fn test_update_missing_user_returns_404_without_creating(pool: SqlitePool) {
    let server = create_test_app(pool).await;

    let response = server
        .put("/users/ghost")
        .json(&serde_json::json!({"displayName": "Ghost"}))
        .await;
    assert_eq!(response.status_code(), 404);

    let response = server.get("/users/ghost").await;
    assert_eq!(response.status_code(), 404);
}

#[sqlx::test]
#[test_log::test]
async fn test_delete_twice_returns_204_then_404(pool: SqlitePool) {
    let server = create_test_app(pool).await;

    server
        .post("/users")
        .json(&serde_json::json!({"username": "alice"}))
        .await
        .assert_status_success();

    let response = server.delete("/users/alice").await;
    assert_eq!(response.status_code(), 204);

    let response = server.delete("/users/alice").await;
    assert_eq!(response.status_code(), 404);
}

#[sqlx::test]
#[test_log::test]
async fn test_blank_search_term_returns_full_listing(pool: SqlitePool) {
    let server = create_test_app(pool).await;

    for username in ["alice", "bob", "carol"] {
        server
            .post("/users")
            .json(&serde_json::json!({"username": username}))
            .await
            .assert_status_success();
    }

    let all: Vec<UserResponse> = server.get("/users").await.json();
    assert_eq!(all.len(), 3);

    // An empty or whitespace-only searchTerm must return the same full set
    let blank: Vec<UserResponse> = server
        .get("/users")
        .add_query_param("searchTerm", "")
        .await
        .json();
    assert_eq!(blank.len(), all.len());

    let whitespace: Vec<UserResponse> = server
        .get("/users")
        .add_query_param("searchTerm", "   ")
        .await
        .json();
    assert_eq!(whitespace.len(), all.len());
}

#[sqlx::test]
#[test_log::test]
async fn test_search_filters_by_substring(pool: SqlitePool) {
    let server = create_test_app(pool).await;

    for username in ["alice", "malicent", "bob"] {
        server
            .post("/users")
            .json(&serde_json::json!({"username": username}))
            .await
            .assert_status_success();
    }

    let matches: Vec<UserResponse> = server
        .get("/users")
        .add_query_param("searchTerm", "ali")
        .await
        .json();
    let mut usernames: Vec<_> = matches.into_iter().map(|u| u.username).collect();
    usernames.sort();
    assert_eq!(usernames, vec!["alice", "malicent"]);
}

#[sqlx::test]
#[test_log::test]
async fn test_validation_failures_are_reported_per_field(pool: SqlitePool) {
    let server = create_test_app(pool).await;

    // Missing username
    let response = server
        .post("/users")
        .json(&serde_json::json!({"displayName": "No Name"}))
        .await;
    assert_eq!(response.status_code(), 400);
    let failures: Vec<ValidationFailure> = response.json();
    assert!(failures.iter().any(|f| f.field == "username"));

    // Forbidden characters
    let response = server
        .post("/users")
        .json(&serde_json::json!({"username": "not a valid name"}))
        .await;
    assert_eq!(response.status_code(), 400);

    // Nothing was persisted by the rejected requests
    let all: Vec<UserResponse> = server.get("/users").await.json();
    assert!(all.is_empty());
}

#[sqlx::test]
#[test_log::test]
async fn test_put_path_username_overrides_body(pool: SqlitePool) {
    let server = create_test_app(pool).await;

    server
        .post("/users")
        .json(&serde_json::json!({"username": "alice"}))
        .await
        .assert_status_success();

    // The body claims to be "bob"; the path wins
    let response = server
        .put("/users/alice")
        .json(&serde_json::json!({"username": "bob", "displayName": "Alice B"}))
        .await;
    assert_eq!(response.status_code(), 204);

    let fetched: UserResponse = server.get("/users/alice").await.json();
    assert_eq!(fetched.display_name, Some("Alice B".to_string()));

    let response = server.get("/users/bob").await;
    assert_eq!(response.status_code(), 404);
}

/// The full user journey from the spec: create, read, replace, delete.
#[sqlx::test]
#[test_log::test]
async fn test_full_crud_flow(pool: SqlitePool) {
    let server = create_test_app(pool).await;

    let response = server
        .post("/users")
        .json(&serde_json::json!({"username": "alice"}))
        .await;
    assert_eq!(response.status_code(), 201);
    let created: UserResponse = response.json();
    assert_eq!(created.username, "alice");
    assert_eq!(created.display_name, None);

    let response = server.get("/users/alice").await;
    assert_eq!(response.status_code(), 200);

    let response = server
        .put("/users/alice")
        .json(&serde_json::json!({"username": "alice", "displayName": "Alice B"}))
        .await;
    assert_eq!(response.status_code(), 204);

    let fetched: UserResponse = server.get("/users/alice").await.json();
    assert_eq!(fetched.display_name, Some("Alice B".to_string()));

    let response = server.delete("/users/alice").await;
    assert_eq!(response.status_code(), 204);

    let response = server.get("/users/alice").await;
    assert_eq!(response.status_code(), 404);
}
