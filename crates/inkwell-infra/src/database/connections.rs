use std::collections::HashMap;
use std::env;
use std::path::Path;
#[cfg(feature = "postgres")]
use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the database holding authors and posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    /// Load configuration from environment variables, reading `.env` first
    /// if one is present.
    ///
    /// Returns `None` when `DATABASE_URL` is unset; the caller then runs on
    /// in-memory storage.
    pub fn from_env() -> Option<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from a dotenv-format file without touching the
    /// process environment. Variables already set in the environment win.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Option<Self>, dotenvy::Error> {
        let file: HashMap<String, String> =
            dotenvy::from_path_iter(path)?.collect::<Result<_, _>>()?;
        Ok(Self::from_lookup(|key| {
            env::var(key).ok().or_else(|| file.get(key).cloned())
        }))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let url = lookup("DATABASE_URL")?;
        Some(Self {
            url,
            max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: lookup("DB_MIN_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        })
    }
}

/// Connection pool for the main database.
///
/// Build repositories from `main`, e.g.
/// `PostgresAuthorRepository::new(connections.main)`.
#[cfg(feature = "postgres")]
pub struct DatabaseConnections {
    pub main: DbConn,
}

#[cfg(feature = "postgres")]
impl DatabaseConnections {
    /// Open the connection pool from configuration.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let main = Database::connect(opts).await?;
        tracing::info!("Database connected (pool: {})", config.max_connections);

        Ok(Self { main })
    }
}
