//! Repository for appointment records
//!
//! This module defines the storage interface for appointments. The store owns
//! the persisted records and nothing else: single-record reads and writes,
//! plus the two list queries the service needs. There is deliberately no
//! delete operation anywhere in this interface.

use crate::error::DbError;
use estatify_common::services::BoxFuture;

// Re-export the shared entity for convenience
pub use estatify_common::models::{Appointment, AppointmentStatus};

/// Storage interface for appointment records.
///
/// Implementations perform exactly one round trip per call and hold no state
/// beyond their connection; every service operation is an independent
/// read-modify-write with last-writer-wins semantics on races.
pub trait AppointmentRepository: Send + Sync {
    /// Initialize the backing schema if it does not already exist.
    fn init_schema(&self) -> BoxFuture<'_, (), DbError>;

    /// Persist a new appointment record.
    fn insert(&self, appointment: Appointment) -> BoxFuture<'_, Appointment, DbError>;

    /// Find an appointment by its identifier.
    fn find_by_id(&self, id: &str) -> BoxFuture<'_, Option<Appointment>, DbError>;

    /// Find all appointments requested by a user, in creation order.
    fn find_by_user(&self, user_id: &str) -> BoxFuture<'_, Vec<Appointment>, DbError>;

    /// Find all appointments, in creation order.
    fn find_all(&self) -> BoxFuture<'_, Vec<Appointment>, DbError>;

    /// Overwrite the stored record that shares the appointment's id.
    fn update(&self, appointment: Appointment) -> BoxFuture<'_, Appointment, DbError>;
}
