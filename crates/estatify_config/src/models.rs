use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Database Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String, // e.g., DATABASE_URL loaded via EST_DATABASE__URL or DATABASE_URL
}

// --- Directory Config ---
// Base location of the platform API that owns property and user records.
// The appointment subsystem only reads summaries from it.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DirectoryConfig {
    pub base_url: String, // Mandatory
    /// Request timeout for directory lookups, in seconds.
    pub request_timeout_secs: Option<u64>,
}

// --- Appointments Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppointmentsConfig {
    /// Role string (from the auth gateway) treated as administrative.
    /// Defaults to "admin" when absent.
    pub admin_role: Option<String>,
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_appointments: bool,
    #[serde(default)]
    pub use_directory: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub database: Option<DatabaseConfig>, // Central DB config
    #[serde(default)]
    pub appointments: Option<AppointmentsConfig>,
    #[serde(default)]
    pub directory: Option<DirectoryConfig>,
}
