use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr};

/// Configuration for the post store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Any URL SeaORM understands (`postgres://...`, `sqlite::memory:`, ...).
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Open the connection pool.
///
/// For `sqlite::memory:` the pool must keep at least one connection open,
/// otherwise the database disappears with its last connection.
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, DbErr> {
    tracing::info!("Initializing database connection...");

    let min_connections = config.min_connections.max(1).min(config.max_connections);
    let opts = ConnectOptions::new(&config.url)
        .max_connections(config.max_connections)
        .min_connections(min_connections)
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.connect_timeout)
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true)
        .to_owned();

    let conn = Database::connect(opts).await?;
    tracing::info!(
        backend = ?conn.get_database_backend(),
        pool = config.max_connections,
        "Database connected"
    );

    Ok(conn)
}
