//! Application configuration management.
//!
//! Configuration is loaded from a YAML file with environment variable
//! overrides. The file path defaults to `config.yaml` but can be specified via
//! the `-f` flag or the `SUIKA_CONFIG` environment variable.
//!
//! Sources are merged in order, later ones overriding earlier ones:
//!
//! 1. **YAML config file** - base configuration
//! 2. **Environment variables** - variables prefixed with `SUIKA_`
//! 3. **DATABASE_URL** - special case: overrides `database.url` if set
//!
//! Nested values use double underscores in environment variables, e.g.
//! `SUIKA_DATABASE__URL=sqlite://users.db` sets `database.url`.

use clap::Parser;
use figment::{
    providers::{Env, Format, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Simple CLI args - just for specifying the config file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file
    #[arg(short = 'f', long, env = "SUIKA_CONFIG", default_value = "config.yaml")]
    pub config: String,

    /// Validate configuration and exit without starting the server.
    #[arg(long)]
    pub validate: bool,
}

/// Main application configuration.
///
/// All fields have defaults, so the service starts with no config file at all.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// HTTP server host to bind to (e.g., "0.0.0.0" for all interfaces)
    pub host: String,
    /// HTTP server port to bind to
    pub port: u16,
    /// SQLite database settings
    pub database: DatabaseConfig,
    /// Interactive API documentation (development mode only)
    pub docs: DocsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            database: DatabaseConfig::default(),
            docs: DocsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    /// SQLite connection string, e.g. "sqlite://suika.db"
    pub url: String,
    /// How long a statement may wait on a locked database
    pub busy_timeout_ms: u64,
    /// How long a request may wait for a pooled connection
    pub acquire_timeout_ms: u64,
    /// Upper bound on pooled connections
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://suika.db".to_string(),
            busy_timeout_ms: 5_000,
            acquire_timeout_ms: 5_000,
            max_connections: 5,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocsConfig {
    /// Serve the OpenAPI document and interactive docs at /docs
    pub enabled: bool,
}

impl Config {
    /// Load configuration from the YAML file named in `args`, then apply
    /// `SUIKA_`-prefixed environment overrides.
    pub fn load(args: &Args) -> anyhow::Result<Self> {
        // SUIKA_CONFIG names the file itself (consumed by clap); it must not
        // reach the figment merge or deny_unknown_fields rejects it.
        let mut config: Config = Figment::new()
            .merge(Yaml::file(&args.config))
            .merge(Env::prefixed("SUIKA_").ignore(&["CONFIG"]).split("__"))
            .extract()?;

        // DATABASE_URL wins over everything, matching deployment convention
        if let Ok(url) = std::env::var("DATABASE_URL") {
            config.database.url = url;
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
