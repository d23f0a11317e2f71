use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use estatify_common::models::{Appointment, AppointmentStatus, PropertySummary, UserSummary};
use estatify_db::DbError;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

// --- Error Handling ---
use thiserror::Error;

/// Errors surfaced by appointment operations.
#[derive(Error, Debug)]
pub enum AppointmentError {
    #[error("Appointment not found: {0}")]
    NotFound(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Missing or invalid caller identity")]
    Unauthorized,
    #[error("Appointment store error: {0}")]
    Store(#[from] DbError),
}

impl AppointmentError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppointmentError::NotFound(_) => StatusCode::NOT_FOUND,
            AppointmentError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            AppointmentError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppointmentError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppointmentError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Store failures are logged server-side; the wire carries a generic message.
        let message = match &self {
            AppointmentError::Store(e) => {
                tracing::error!("appointment store failure: {}", e);
                "Appointment store unavailable".to_string()
            }
            other => other.to_string(),
        };
        let body = Json(json!({
            "error": {
                "message": message,
                "code": status.as_u16(),
            }
        }));
        (status, body).into_response()
    }
}

/// Which slice of the appointment book a caller may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Every stored appointment; administrative callers only.
    All,
    /// Appointments whose requester identifier equals the caller's identifier.
    Own,
}

// --- Data Structures ---

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreateAppointmentRequest {
    /// Identifier of the property to view
    pub property_id: String,
    /// Date and time of the requested viewing, RFC 3339
    #[cfg_attr(feature = "openapi", schema(example = "2025-07-01T14:00:00Z"))]
    pub date: DateTime<Utc>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ChangeStatusRequest {
    /// Requested status: "pending", "confirmed" or "cancelled"
    #[cfg_attr(feature = "openapi", schema(example = "confirmed"))]
    pub status: String,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct UpdateMeetingLinkRequest {
    /// Meeting point for the viewing; any non-empty string is accepted
    #[cfg_attr(feature = "openapi", schema(example = "https://meet.example.com/visit-42"))]
    pub meeting_link: String,
}

/// A stored appointment populated with its resolved references.
///
/// The property and requester summaries are joined in at read time from the
/// platform directory; they are never persisted with the appointment.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AppointmentRecord {
    #[serde(flatten)]
    pub appointment: Appointment,
    pub property: PropertySummary,
    pub requester: UserSummary,
}

#[derive(Serialize, Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AppointmentListResponse {
    pub appointments: Vec<AppointmentRecord>,
}

// --- Core Rules ---

/// Parse a requested status value submitted over the wire.
///
/// Unknown values are an `InvalidArgument`, never coerced to a default.
pub fn parse_requested_status(requested: &str) -> Result<AppointmentStatus, AppointmentError> {
    requested
        .parse::<AppointmentStatus>()
        .map_err(|e| AppointmentError::InvalidArgument(e.to_string()))
}

/// Validate a submitted meeting link.
///
/// Trimming is used only to decide emptiness; the accepted value is stored
/// exactly as submitted. No URL-shape validation is performed.
pub fn validate_meeting_link(link: &str) -> Result<(), AppointmentError> {
    if link.trim().is_empty() {
        return Err(AppointmentError::InvalidArgument(
            "meeting link must not be empty".to_string(),
        ));
    }
    Ok(())
}
