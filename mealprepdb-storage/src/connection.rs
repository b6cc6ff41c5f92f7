use crate::config::DatabaseConfig;
use crate::error::StorageError;
use sea_orm::{
    ConnectOptions, Database, DatabaseConnection as SeaConnection, DatabaseTransaction,
    TransactionTrait,
};
use std::time::Duration;
use tracing::{debug, info};

/// Database connection wrapper with configuration
#[derive(Clone)]
pub struct DatabaseConnection {
    connection: SeaConnection,
    config: DatabaseConfig,
}

impl DatabaseConnection {
    /// Create a new database connection pool
    pub async fn new(config: DatabaseConfig) -> Result<Self, StorageError> {
        info!("Connecting to database: {}", config.url);

        let mut opts = ConnectOptions::new(&config.url);
        opts.max_connections(effective_max_connections(&config))
            .min_connections(config.min_connections)
            .connect_timeout(config.connection_timeout)
            .acquire_timeout(config.connection_timeout)
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true);

        let connection = Database::connect(opts).await?;

        debug!(
            "Database connection established with {} max connections",
            config.max_connections
        );

        Ok(Self { connection, config })
    }

    /// Get the underlying Sea-ORM connection
    pub fn get_connection(&self) -> &SeaConnection {
        &self.connection
    }

    /// Get database configuration
    pub fn get_config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Begin a transaction.
    ///
    /// Dropping the returned transaction without committing rolls it back;
    /// callers commit only on their success path.
    pub async fn begin(&self) -> Result<DatabaseTransaction, StorageError> {
        Ok(self.connection.begin().await?)
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<(), StorageError> {
        use sea_orm_migration::MigratorTrait;

        info!("Running database migrations");

        crate::migrations::Migrator::up(&self.connection, None)
            .await
            .map_err(|e| StorageError::Migration(e.to_string()))?;

        info!("Database migrations completed");
        Ok(())
    }

    /// Check database connectivity
    pub async fn ping(&self) -> Result<(), StorageError> {
        self.connection.ping().await?;
        Ok(())
    }

    /// Close the database connection
    pub async fn close(self) -> Result<(), StorageError> {
        info!("Closing database connection");
        self.connection.close().await?;
        Ok(())
    }
}

/// An in-memory sqlite database exists per connection, so a pool larger
/// than one would hand each request a different empty database.
fn effective_max_connections(config: &DatabaseConfig) -> u32 {
    if config.url.contains(":memory:") {
        1
    } else {
        config.max_connections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> DatabaseConfig {
        DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_database_connection() {
        let db = DatabaseConnection::new(test_config()).await;
        assert!(db.is_ok());
        assert!(db.unwrap().ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_database_migration() {
        let db = DatabaseConnection::new(test_config()).await.unwrap();
        assert!(db.migrate().await.is_ok());
        // migrations are idempotent
        assert!(db.migrate().await.is_ok());
    }

    #[test]
    fn test_memory_database_uses_single_connection() {
        assert_eq!(effective_max_connections(&test_config()), 1);

        let file_config = DatabaseConfig {
            url: "sqlite://some.db".to_string(),
            ..Default::default()
        };
        assert_eq!(effective_max_connections(&file_config), 5);
    }
}
