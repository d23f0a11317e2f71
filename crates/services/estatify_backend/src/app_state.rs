use crate::service_factory::EstatifyServiceFactory;
use estatify_appointments::handlers::AppointmentsState;
use estatify_appointments::service::AppointmentService;
use estatify_common::is_appointments_enabled;
use estatify_common::services::ServiceFactory;
use estatify_config::AppConfig;
use estatify_db::DbClient;
use std::sync::Arc;
use tracing::info;

/// Application state that is shared across all routes.
///
/// Holds the loaded configuration, the service factory and the wired
/// appointment state. Everything here is cheap to clone; the expensive
/// resources live behind `Arc`s.
#[derive(Clone)]
pub struct AppState {
    /// The application configuration.
    #[allow(dead_code)]
    pub config: Arc<AppConfig>,

    /// Service factory for accessing external collaborators.
    #[allow(dead_code)]
    pub service_factory: Arc<dyn ServiceFactory>,

    /// Database client used by the health endpoint, when configured.
    pub db_client: Option<DbClient>,

    /// Appointment feature state, present when the feature is enabled.
    pub appointments_state: Option<Arc<AppointmentsState>>,
}

impl AppState {
    /// Create a new AppState with the given configuration.
    ///
    /// Builds the service factory and wires the appointment service from it.
    pub async fn new(config: Arc<AppConfig>) -> Self {
        let factory = Arc::new(EstatifyServiceFactory::new(config.clone()).await);

        let appointments_state = if is_appointments_enabled(&config) {
            let directory = factory
                .directory_service()
                .expect("service factory always provides a directory resolver");
            let service = Arc::new(AppointmentService::new(
                factory.appointment_store(),
                directory,
            ));
            info!("Appointment service initialized.");
            Some(Arc::new(AppointmentsState {
                config: config.clone(),
                service,
            }))
        } else {
            info!("Appointments feature disabled via runtime config.");
            None
        };

        Self {
            config,
            db_client: factory.db_client(),
            service_factory: factory,
            appointments_state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estatify_config::ServerConfig;

    fn config(use_appointments: bool) -> Arc<AppConfig> {
        Arc::new(AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8086,
            },
            use_appointments,
            use_directory: false,
            database: None,
            appointments: None,
            directory: None,
        })
    }

    #[tokio::test]
    async fn appointments_state_follows_the_runtime_flag() {
        let state = AppState::new(config(true)).await;
        assert!(state.appointments_state.is_some());
        assert!(state.db_client.is_none());

        let state = AppState::new(config(false)).await;
        assert!(state.appointments_state.is_none());
    }
}
