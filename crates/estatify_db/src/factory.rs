//! Factory for creating database clients

use crate::client::DbClient;
use crate::error::DbError;
use estatify_config::{AppConfig, DatabaseConfig};
use std::sync::Arc;
use tracing::debug;

/// Factory for creating database clients
///
/// This factory provides methods for creating database clients using
/// different configuration sources.
#[derive(Debug, Clone, Default)]
pub struct DbClientFactory;

impl DbClientFactory {
    /// Create a new database client factory
    pub fn new() -> Self {
        Self
    }

    /// Create a new database client from an application configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the database configuration is missing or the
    /// connection fails.
    pub async fn from_app_config(&self, config: &Arc<AppConfig>) -> Result<DbClient, DbError> {
        debug!("Creating database client from application configuration");

        let db_config = config
            .database
            .as_ref()
            .ok_or_else(|| DbError::ConfigError("Database configuration is missing".to_string()))?;

        self.from_db_config(db_config).await
    }

    /// Create a new database client from a database configuration.
    pub async fn from_db_config(&self, db_config: &DatabaseConfig) -> Result<DbClient, DbError> {
        DbClient::from_config(db_config).await
    }
}
