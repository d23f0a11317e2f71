use crate::auth::CallerIdentity;
use crate::logic::{
    AppointmentError, AppointmentListResponse, ChangeStatusRequest, CreateAppointmentRequest,
    UpdateMeetingLinkRequest,
};
use crate::service::AppointmentService;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use estatify_common::models::Appointment;
use estatify_config::AppConfig;
use std::sync::Arc;
use tracing::debug;

/// Role treated as administrative when the config does not name one.
const DEFAULT_ADMIN_ROLE: &str = "admin";

// Define shared state needed by appointment handlers
#[derive(Clone)]
pub struct AppointmentsState {
    pub config: Arc<AppConfig>,
    pub service: Arc<AppointmentService>,
}

impl AppointmentsState {
    fn admin_role(&self) -> &str {
        self.config
            .appointments
            .as_ref()
            .and_then(|a| a.admin_role.as_deref())
            .unwrap_or(DEFAULT_ADMIN_ROLE)
    }
}

/// Handler to list the appointments visible to the caller.
///
/// Administrative callers see every record; everyone else sees the records
/// they requested themselves. Each record carries its resolved property and
/// requester summaries.
#[axum::debug_handler]
pub async fn list_appointments_handler(
    State(state): State<Arc<AppointmentsState>>,
    caller: CallerIdentity,
) -> Result<Json<AppointmentListResponse>, AppointmentError> {
    let scope = caller.scope(state.admin_role());
    debug!("Listing appointments for {} with {:?}", caller.user_id, scope);

    let appointments = state.service.list_appointments(&caller, scope).await?;
    Ok(Json(AppointmentListResponse { appointments }))
}

/// Handler to book a viewing for the calling user.
#[axum::debug_handler]
pub async fn create_appointment_handler(
    State(state): State<Arc<AppointmentsState>>,
    caller: CallerIdentity,
    Json(payload): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<Appointment>), AppointmentError> {
    let appointment = state.service.create_appointment(&caller, payload).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

/// Handler to overwrite an appointment's status.
#[axum::debug_handler]
pub async fn change_status_handler(
    State(state): State<Arc<AppointmentsState>>,
    Path(appointment_id): Path<String>,
    caller: CallerIdentity,
    Json(payload): Json<ChangeStatusRequest>,
) -> Result<Json<Appointment>, AppointmentError> {
    let appointment = state
        .service
        .change_status(&caller, &appointment_id, &payload.status)
        .await?;
    Ok(Json(appointment))
}

/// Handler to attach or replace an appointment's meeting link.
#[axum::debug_handler]
pub async fn update_meeting_link_handler(
    State(state): State<Arc<AppointmentsState>>,
    Path(appointment_id): Path<String>,
    caller: CallerIdentity,
    Json(payload): Json<UpdateMeetingLinkRequest>,
) -> Result<Json<Appointment>, AppointmentError> {
    let appointment = state
        .service
        .set_meeting_link(&caller, &appointment_id, &payload.meeting_link)
        .await?;
    Ok(Json(appointment))
}
