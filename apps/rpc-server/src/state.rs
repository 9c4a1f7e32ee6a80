//! Application state - shared across all handlers.

use std::sync::Arc;

use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use quill_core::PostService;
use quill_infra::{DatabaseConfig, SeaOrmPostRepository};
use sea_orm::DbConn;

/// Shared application state. Cloned into every actix worker.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub db: Arc<DbConn>,
}

impl AppState {
    /// Connect to the store, apply the schema and wire repository and service.
    pub async fn new(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let db = quill_infra::connect(config)
            .await
            .context("failed to connect to database")?;

        Migrator::up(&db, None)
            .await
            .context("failed to apply schema migrations")?;
        tracing::info!("Schema migrated");

        let db = Arc::new(db);
        let repository = Arc::new(SeaOrmPostRepository::new(Arc::clone(&db)));
        tracing::info!("Initialized repository");

        let posts = PostService::new(repository);
        tracing::info!("Initialized service");

        Ok(Self { posts, db })
    }
}
