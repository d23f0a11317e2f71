use crate::handlers::{
    change_status_handler, create_appointment_handler, list_appointments_handler,
    update_meeting_link_handler, AppointmentsState,
};
use axum::{
    routing::{get, patch},
    Router,
};
use std::sync::Arc;

/// Creates a router containing all routes for the appointment feature.
///
/// The caller assembles the state (store, directory resolver, config) and
/// nests the returned router under its API prefix.
pub fn routes(state: Arc<AppointmentsState>) -> Router {
    Router::new()
        .route(
            "/appointments",
            get(list_appointments_handler).post(create_appointment_handler),
        )
        .route("/appointments/{id}/status", patch(change_status_handler))
        .route(
            "/appointments/{id}/meeting-link",
            patch(update_meeting_link_handler),
        )
        .with_state(state)
}
