//! Test utilities for integration testing.

use crate::config::Config;
use axum_test::TestServer;
use sqlx::SqlitePool;

pub fn create_test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        // The pool is provided by the test harness; this URL is never dialed.
        database: crate::config::DatabaseConfig::default(),
        docs: crate::config::DocsConfig { enabled: false },
    }
}

pub async fn create_test_app(pool: SqlitePool) -> TestServer {
    let app = crate::Application::new_with_pool(create_test_config(), pool)
        .await
        .expect("Failed to create application");

    app.into_test_server()
}
