//! Appointment service.
//!
//! The service enforces the status workflow and visibility rules over the
//! appointment store. It holds no state of its own: every operation reads
//! current state from the store and writes the new state back, one record at
//! a time. Two concurrent writes to the same record race and the later write
//! wins; status changes are low-frequency operations and no conflict is
//! reported.

use crate::auth::CallerIdentity;
use crate::logic::{
    AppointmentError, AppointmentRecord, CreateAppointmentRequest, Scope,
    parse_requested_status, validate_meeting_link,
};
use chrono::Utc;
use estatify_common::models::{Appointment, PropertySummary, UserSummary};
use estatify_common::services::DirectoryService;
use estatify_db::AppointmentRepository;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Appointment lifecycle service.
pub struct AppointmentService {
    store: Arc<dyn AppointmentRepository>,
    directory: Arc<dyn DirectoryService>,
}

impl AppointmentService {
    /// Create a new appointment service over a store and a directory resolver.
    pub fn new(store: Arc<dyn AppointmentRepository>, directory: Arc<dyn DirectoryService>) -> Self {
        Self { store, directory }
    }

    /// Book a viewing for the calling user.
    ///
    /// The new record starts in the `Pending` state with no meeting link and
    /// the caller as its immutable requester.
    pub async fn create_appointment(
        &self,
        caller: &CallerIdentity,
        request: CreateAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        if request.property_id.trim().is_empty() {
            return Err(AppointmentError::InvalidArgument(
                "property_id must not be empty".to_string(),
            ));
        }

        let appointment = Appointment::new(
            Uuid::new_v4().to_string(),
            request.property_id,
            caller.user_id.clone(),
            request.date,
        );

        info!(
            "Creating appointment {} for user {} on property {}",
            appointment.id, appointment.user_id, appointment.property_id
        );
        Ok(self.store.insert(appointment).await?)
    }

    /// Fetch a single appointment by id.
    pub async fn get_appointment(
        &self,
        _caller: &CallerIdentity,
        appointment_id: &str,
    ) -> Result<Appointment, AppointmentError> {
        self.store
            .find_by_id(appointment_id)
            .await?
            .ok_or_else(|| AppointmentError::NotFound(appointment_id.to_string()))
    }

    /// Overwrite an appointment's status with the requested value.
    ///
    /// Every transition is accepted today, `cancelled -> confirmed` included;
    /// `AppointmentStatus::can_transition_to` is the single place a future
    /// guard would land. Unknown status values fail with `InvalidArgument`
    /// and leave the stored record unmodified. No notification is sent.
    pub async fn change_status(
        &self,
        caller: &CallerIdentity,
        appointment_id: &str,
        requested_status: &str,
    ) -> Result<Appointment, AppointmentError> {
        let status = parse_requested_status(requested_status)?;

        let mut appointment = self
            .store
            .find_by_id(appointment_id)
            .await?
            .ok_or_else(|| AppointmentError::NotFound(appointment_id.to_string()))?;

        if !appointment.status.can_transition_to(status) {
            return Err(AppointmentError::InvalidArgument(format!(
                "transition {} -> {} is not permitted",
                appointment.status, status
            )));
        }

        info!(
            "User {} changing appointment {} status {} -> {}",
            caller.user_id, appointment_id, appointment.status, status
        );

        appointment.status = status;
        appointment.updated_at = Utc::now();
        Ok(self.store.update(appointment).await?)
    }

    /// Attach or replace an appointment's meeting link.
    ///
    /// Whitespace-only submissions are rejected; an accepted value replaces
    /// any prior link and is stored exactly as submitted.
    pub async fn set_meeting_link(
        &self,
        caller: &CallerIdentity,
        appointment_id: &str,
        link: &str,
    ) -> Result<Appointment, AppointmentError> {
        validate_meeting_link(link)?;

        let mut appointment = self
            .store
            .find_by_id(appointment_id)
            .await?
            .ok_or_else(|| AppointmentError::NotFound(appointment_id.to_string()))?;

        info!(
            "User {} setting meeting link on appointment {}",
            caller.user_id, appointment_id
        );

        appointment.meeting_link = Some(link.to_string());
        appointment.updated_at = Utc::now();
        Ok(self.store.update(appointment).await?)
    }

    /// List the appointments visible to the caller, each populated with its
    /// resolved property and requester summaries.
    ///
    /// `Scope::Own` filters by requester identifier equality with the
    /// caller's identifier. Ordering is the store's creation order.
    pub async fn list_appointments(
        &self,
        caller: &CallerIdentity,
        scope: Scope,
    ) -> Result<Vec<AppointmentRecord>, AppointmentError> {
        let appointments = match scope {
            Scope::All => self.store.find_all().await?,
            Scope::Own => self.store.find_by_user(&caller.user_id).await?,
        };

        debug!(
            "Listing {} appointments for caller {} ({:?})",
            appointments.len(),
            caller.user_id,
            scope
        );

        let mut records = Vec::with_capacity(appointments.len());
        for appointment in appointments {
            let property = self.resolve_property(&appointment.property_id).await;
            let requester = self.resolve_user(&appointment.user_id).await;
            records.push(AppointmentRecord {
                appointment,
                property,
                requester,
            });
        }
        Ok(records)
    }

    // Directory lookups are display data; a failed lookup degrades to a
    // placeholder summary rather than failing the whole listing.
    async fn resolve_property(&self, property_id: &str) -> PropertySummary {
        match self.directory.get_property(property_id).await {
            Ok(summary) => summary,
            Err(e) => {
                warn!("Failed to resolve property {}: {}", property_id, e);
                PropertySummary::unresolved(property_id)
            }
        }
    }

    async fn resolve_user(&self, user_id: &str) -> UserSummary {
        match self.directory.get_user(user_id).await {
            Ok(summary) => summary,
            Err(e) => {
                warn!("Failed to resolve user {}: {}", user_id, e);
                UserSummary::unresolved(user_id)
            }
        }
    }
}
