//! Factory for creating appointment repositories

use crate::repositories::appointment::AppointmentRepository;
use crate::repositories::appointment_memory::InMemoryAppointmentRepository;
use crate::repositories::appointment_sql::SqlAppointmentRepository;
use crate::{DbClient, DbError};
use estatify_config::AppConfig;
use std::sync::Arc;
use tracing::{info, warn};

/// Factory for creating appointment repositories
///
/// Picks the SQL-backed store when a database is configured and falls back to
/// the in-memory store otherwise, so the subsystem stays usable in local
/// development without a database URL.
#[derive(Debug, Clone, Default)]
pub struct AppointmentRepositoryFactory;

impl AppointmentRepositoryFactory {
    /// Create a new appointment repository factory
    pub fn new() -> Self {
        Self
    }

    /// Create a repository from the application configuration.
    ///
    /// The schema is initialized before the repository is returned.
    pub async fn from_app_config(
        &self,
        config: &Arc<AppConfig>,
    ) -> Result<Arc<dyn AppointmentRepository>, DbError> {
        match config.database.as_ref() {
            Some(db_config) => {
                let db_client = DbClient::from_config(db_config).await?;
                let repository = SqlAppointmentRepository::new(db_client);
                repository.init_schema().await?;
                info!("Using SQL appointment store");
                Ok(Arc::new(repository))
            }
            None => {
                warn!("No database configured, using in-memory appointment store");
                Ok(Arc::new(InMemoryAppointmentRepository::new()))
            }
        }
    }

    /// Create a SQL repository from an existing database client.
    pub fn from_db_client(&self, db_client: DbClient) -> SqlAppointmentRepository {
        SqlAppointmentRepository::new(db_client)
    }
}
