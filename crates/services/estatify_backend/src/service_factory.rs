//! Service factory implementation.
//!
//! Wires the appointment store and the directory resolver from configuration.
//! Services degrade instead of aborting startup: an unreachable database
//! falls back to the in-memory store, a disabled or broken directory falls
//! back to the static resolver.

use estatify_appointments::directory::{HttpDirectoryService, StaticDirectoryService};
use estatify_common::is_directory_enabled;
use estatify_common::services::{DirectoryService, ServiceFactory};
use estatify_config::AppConfig;
use estatify_db::{
    AppointmentRepository, DbClient, DbClientFactory, InMemoryAppointmentRepository,
    SqlAppointmentRepository,
};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Service factory for the backend.
///
/// Initializes services once at startup based on the application
/// configuration and hands out shared instances.
pub struct EstatifyServiceFactory {
    /// Kept so the factory can rewire services from the same configuration
    /// it was built with.
    #[allow(dead_code)]
    config: Arc<AppConfig>,
    db_client: Option<DbClient>,
    appointment_store: Arc<dyn AppointmentRepository>,
    directory_service: Arc<dyn DirectoryService>,
}

impl EstatifyServiceFactory {
    /// Create a new service factory.
    pub async fn new(config: Arc<AppConfig>) -> Self {
        let db_client = match config.database.as_ref() {
            Some(db_config) => match DbClientFactory::new().from_db_config(db_config).await {
                Ok(client) => {
                    info!("Database client initialized.");
                    Some(client)
                }
                Err(e) => {
                    error!("Failed to initialize database client: {}. Falling back to in-memory store.", e);
                    None
                }
            },
            None => None,
        };

        let appointment_store: Arc<dyn AppointmentRepository> = match db_client.clone() {
            Some(client) => {
                let repository = SqlAppointmentRepository::new(client);
                match repository.init_schema().await {
                    Ok(()) => {
                        info!("Appointment store initialized (SQL).");
                        Arc::new(repository)
                    }
                    Err(e) => {
                        error!("Failed to initialize appointment schema: {}. Falling back to in-memory store.", e);
                        Arc::new(InMemoryAppointmentRepository::new())
                    }
                }
            }
            None => {
                warn!("No database configured, using in-memory appointment store.");
                Arc::new(InMemoryAppointmentRepository::new())
            }
        };

        let directory_service: Arc<dyn DirectoryService> = if is_directory_enabled(&config) {
            let directory_config = config
                .directory
                .as_ref()
                .expect("directory config present when enabled");
            match HttpDirectoryService::from_config(directory_config) {
                Ok(service) => {
                    info!("Directory resolver initialized at {}.", directory_config.base_url);
                    Arc::new(service)
                }
                Err(e) => {
                    error!("Failed to initialize directory resolver: {}. Using placeholder summaries.", e);
                    Arc::new(StaticDirectoryService::new())
                }
            }
        } else {
            info!("Directory resolver disabled via runtime config, using placeholder summaries.");
            Arc::new(StaticDirectoryService::new())
        };

        Self {
            config,
            db_client,
            appointment_store,
            directory_service,
        }
    }

    /// The database client, when a database is configured and reachable.
    pub fn db_client(&self) -> Option<DbClient> {
        self.db_client.clone()
    }

    /// The appointment store backing the service.
    pub fn appointment_store(&self) -> Arc<dyn AppointmentRepository> {
        self.appointment_store.clone()
    }
}

impl ServiceFactory for EstatifyServiceFactory {
    fn directory_service(&self) -> Option<Arc<dyn DirectoryService>> {
        Some(self.directory_service.clone())
    }
}
