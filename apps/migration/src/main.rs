//! Schema migration CLI for the board database.
//!
//! Reads `DATABASE_URL` (also from `.env`) and accepts the usual
//! `up`, `down`, `status`, `fresh` and `refresh` subcommands.

use sea_orm_migration::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sea_orm_migration=info,migration=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    cli::run_cli(migration::Migrator).await;
}
