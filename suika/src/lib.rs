//! # suika: a small user directory service
//!
//! `suika` exposes CRUD operations over a single "User" resource as a JSON
//! HTTP API, backed by SQLite. The entire system is deliberately thin glue:
//! route handlers, declarative field validation, and parameterized SQL behind
//! a repository layer. The one business rule is username uniqueness, enforced
//! case-insensitively at the database.
//!
//! ## Architecture
//!
//! Built on [Axum](https://github.com/tokio-rs/axum) for the HTTP layer and
//! SQLx over SQLite for persistence. Control flow for a request:
//!
//! ```text
//! route handler -> validation -> users repository -> connection pool -> SQLite
//! ```
//!
//! The **API layer** ([`api`]) holds the route handlers and the DTOs they
//! exchange. The **database layer** ([`db`]) follows the repository pattern:
//! each entity has a repository executing parameterized statements, and a
//! categorized error type ([`db::errors::DbError`]) separates expected
//! outcomes (not found, unique violation) from faults. The **validation
//! layer** ([`validation`]) is an explicit schema check producing a list of
//! field/message failures, run before every write and never touching the
//! database.
//!
//! There is no shared mutable state between requests: [`AppState`] carries
//! the connection pool and the immutable configuration, nothing else.
//!
//! ## Quick start
//!
//! ```no_run
//! use clap::Parser;
//! use suika::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = suika::config::Args::parse();
//!     let config = Config::load(&args)?;
//!     suika::telemetry::init_telemetry()?;
//!
//!     Application::new(config).await?
//!         .serve(async {
//!             tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!         })
//!         .await
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod openapi;
pub mod telemetry;
pub mod validation;

#[cfg(test)]
mod test;
#[cfg(test)]
pub mod test_utils;

use axum::{
    routing::get,
    Router,
};
pub use config::Config;
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{info, instrument, Level};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

/// Application state shared across all request handlers.
///
/// Immutable after startup: a connection pool and the loaded configuration.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Config,
}

/// Get the suika database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Build the application router with all endpoints and middleware.
///
/// Routes:
/// - `GET /` - liveness greeting
/// - `GET/POST /users`, `GET/PUT/DELETE /users/{username}` - user CRUD
/// - `/docs` - interactive API documentation, only when enabled in config
#[instrument(skip_all)]
pub fn build_router(state: AppState) -> Router {
    let docs_enabled = state.config.docs.enabled;

    let mut router = Router::new()
        .route("/", get(api::handlers::users::root))
        .route(
            "/users",
            get(api::handlers::users::list_users).post(api::handlers::users::create_user),
        )
        .route(
            "/users/{username}",
            get(api::handlers::users::get_user)
                .put(api::handlers::users::update_user)
                .delete(api::handlers::users::delete_user),
        )
        .with_state(state);

    // API docs are a development-mode surface
    if docs_enabled {
        router = router.merge(Scalar::with_url("/docs", openapi::ApiDoc::openapi()));
    }

    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::DEBUG))
            .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
    )
}

/// Main application struct that owns all resources and lifecycle.
///
/// 1. **Create**: [`Application::new`] connects the pool and runs migrations
/// 2. **Serve**: [`Application::serve`] binds a TCP port and handles requests
/// 3. **Shutdown**: on the shutdown signal, drains connections and exits
pub struct Application {
    router: Router,
    config: Config,
    pool: SqlitePool,
}

impl Application {
    /// Create a new application instance with all resources initialized
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let pool = db::connect(&config.database).await?;
        Self::new_with_pool(config, pool).await
    }

    /// Create an application over an existing pool (used by tests, where the
    /// pool comes from the test harness)
    pub async fn new_with_pool(config: Config, pool: SqlitePool) -> anyhow::Result<Self> {
        // Schema initialization must complete before any request is served;
        // a failure here aborts startup. Re-running is a no-op.
        migrator().run(&pool).await?;

        let state = AppState {
            db: pool.clone(),
            config: config.clone(),
        };
        let router = build_router(state);

        Ok(Self {
            router,
            config,
            pool,
        })
    }

    /// Convert application into a test server (for tests)
    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router).expect("Failed to create test server")
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!("User service listening on http://{}", bind_addr);

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Closing database connections...");
        self.pool.close().await;

        Ok(())
    }
}
