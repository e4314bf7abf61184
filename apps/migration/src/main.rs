//! Migration CLI tool.
//!
//! Reads `DATABASE_URL` from the environment (or `.env`) and runs the
//! standard `up`/`down`/`status`/`fresh` subcommands.

use sea_orm_migration::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sea_orm=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!("Running inkwell schema migrations");
    cli::run_cli(migration::Migrator).await;
}
