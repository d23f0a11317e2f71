#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::logic::{
    AppointmentListResponse, AppointmentRecord, ChangeStatusRequest, CreateAppointmentRequest,
    UpdateMeetingLinkRequest,
};
use estatify_common::models::{Appointment, AppointmentStatus, PropertySummary, UserSummary};

#[utoipa::path(
    get,
    path = "/appointments",
    params(
        ("x-user-id" = String, Header, description = "Authenticated user id injected by the auth gateway"),
        ("x-user-role" = Option<String>, Header, description = "Authenticated user role; \"admin\" sees every record")
    ),
    responses(
        (status = 200, description = "Appointments visible to the caller", body = AppointmentListResponse),
        (status = 401, description = "Missing or invalid caller identity"),
        (status = 500, description = "Appointment store unavailable")
    )
)]
fn doc_list_appointments_handler() {}

#[utoipa::path(
    post,
    path = "/appointments",
    request_body(content = CreateAppointmentRequest, example = json!({
        "property_id": "prop-42",
        "date": "2025-07-01T14:00:00Z"
    })),
    responses(
        (status = 201, description = "Appointment created in the pending state", body = Appointment),
        (status = 400, description = "Empty property reference"),
        (status = 401, description = "Missing or invalid caller identity")
    )
)]
fn doc_create_appointment_handler() {}

#[utoipa::path(
    patch,
    path = "/appointments/{id}/status",
    params(
        ("id" = String, Path, description = "The appointment to update")
    ),
    request_body(content = ChangeStatusRequest, example = json!({"status": "confirmed"})),
    responses(
        (status = 200, description = "Updated appointment", body = Appointment),
        (status = 400, description = "Unrecognized status value"),
        (status = 404, description = "Appointment not found")
    )
)]
fn doc_change_status_handler() {}

#[utoipa::path(
    patch,
    path = "/appointments/{id}/meeting-link",
    params(
        ("id" = String, Path, description = "The appointment to update")
    ),
    request_body(content = UpdateMeetingLinkRequest, example = json!({
        "meeting_link": "https://meet.example.com/visit-42"
    })),
    responses(
        (status = 200, description = "Updated appointment", body = Appointment),
        (status = 400, description = "Empty or whitespace-only meeting link"),
        (status = 404, description = "Appointment not found")
    )
)]
fn doc_update_meeting_link_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_list_appointments_handler,
        doc_create_appointment_handler,
        doc_change_status_handler,
        doc_update_meeting_link_handler
    ),
    components(
        schemas(
            Appointment,
            AppointmentStatus,
            AppointmentRecord,
            AppointmentListResponse,
            CreateAppointmentRequest,
            ChangeStatusRequest,
            UpdateMeetingLinkRequest,
            PropertySummary,
            UserSummary
        )
    ),
    tags(
        (name = "appointments", description = "Appointment lifecycle API")
    ),
    servers(
        (url = "/api", description = "Estatify API server")
    )
)]
pub struct AppointmentsApiDoc;
