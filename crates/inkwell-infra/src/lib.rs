//! # Inkwell Infrastructure
//!
//! Concrete implementations of the repository ports defined in `inkwell-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL storage via SeaORM

pub mod database;

// Re-exports - In-Memory
pub use database::{InMemoryAuthorRepository, InMemoryPostRepository};

pub use database::DatabaseConfig;

// Re-exports - PostgreSQL
#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresAuthorRepository, PostgresPostRepository};
