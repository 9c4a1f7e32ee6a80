//! Command-line entry point for applying and rolling back the post schema.
//!
//! Reads `DATABASE_URL` (from the environment or `.env`).

use sea_orm_migration::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(
        migrations = migration::Migrator::migrations().len(),
        "Running post schema migrator"
    );

    cli::run_cli(migration::Migrator).await;
}
