// Declare modules within this crate
pub mod error; // Error handling
pub mod features; // Feature flag handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Data structures and models
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{
    auth_error, config_error, internal_error, not_found, validation_error, Context,
    EstatifyError, HttpStatusCode,
};

// Re-export HTTP utilities for easier access
pub use http::{
    client::{create_client, get, post, HTTP_CLIENT},
    handle_json_result, map_json_error, IntoHttpResponse,
};

// Re-export feature flag handling utilities for easier access
pub use features::{is_appointments_enabled, is_directory_enabled, is_feature_enabled};

// Re-export the shared models for easier access
pub use models::{
    Appointment, AppointmentStatus, ParseAppointmentStatusError, PropertySummary, UserSummary,
};
