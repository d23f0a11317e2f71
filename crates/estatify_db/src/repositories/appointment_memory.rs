//! In-memory implementation of the appointment repository
//!
//! Used when no database is configured, and as the fixture backend in tests.
//! Records are kept in insertion order so listings match the SQL
//! implementation's creation-order guarantee.

use crate::error::DbError;
use crate::repositories::appointment::{Appointment, AppointmentRepository};
use estatify_common::services::BoxFuture;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// In-memory implementation of the appointment repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryAppointmentRepository {
    records: Arc<Mutex<Vec<Appointment>>>,
}

impl InMemoryAppointmentRepository {
    /// Create a new empty in-memory repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with the given records
    pub fn with_records(records: Vec<Appointment>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Appointment>> {
        self.records.lock().expect("appointment store mutex poisoned")
    }
}

impl AppointmentRepository for InMemoryAppointmentRepository {
    fn init_schema(&self) -> BoxFuture<'_, (), DbError> {
        Box::pin(async move { Ok(()) })
    }

    fn insert(&self, appointment: Appointment) -> BoxFuture<'_, Appointment, DbError> {
        Box::pin(async move {
            debug!("Inserting appointment {} (in-memory)", appointment.id);
            self.lock().push(appointment.clone());
            Ok(appointment)
        })
    }

    fn find_by_id(&self, id: &str) -> BoxFuture<'_, Option<Appointment>, DbError> {
        let id = id.to_string();
        Box::pin(async move {
            Ok(self.lock().iter().find(|a| a.id == id).cloned())
        })
    }

    fn find_by_user(&self, user_id: &str) -> BoxFuture<'_, Vec<Appointment>, DbError> {
        let user_id = user_id.to_string();
        Box::pin(async move {
            Ok(self
                .lock()
                .iter()
                .filter(|a| a.user_id == user_id)
                .cloned()
                .collect())
        })
    }

    fn find_all(&self) -> BoxFuture<'_, Vec<Appointment>, DbError> {
        Box::pin(async move { Ok(self.lock().clone()) })
    }

    fn update(&self, appointment: Appointment) -> BoxFuture<'_, Appointment, DbError> {
        Box::pin(async move {
            let mut records = self.lock();
            match records.iter_mut().find(|a| a.id == appointment.id) {
                Some(stored) => {
                    // Requester reference and created_at stay as stored.
                    stored.date = appointment.date;
                    stored.status = appointment.status;
                    stored.meeting_link = appointment.meeting_link.clone();
                    stored.updated_at = appointment.updated_at;
                    Ok(stored.clone())
                }
                None => Err(DbError::QueryError(format!(
                    "no appointment with id {}",
                    appointment.id
                ))),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use estatify_common::models::AppointmentStatus;

    fn sample(id: &str, user_id: &str) -> Appointment {
        Appointment::new(id.into(), "prop-1".into(), user_id.into(), Utc::now())
    }

    #[tokio::test]
    async fn insert_then_find_by_id() {
        let repo = InMemoryAppointmentRepository::new();
        repo.insert(sample("a1", "u1")).await.unwrap();

        let found = repo.find_by_id("a1").await.unwrap();
        assert_eq!(found.unwrap().user_id, "u1");
        assert!(repo.find_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_by_user_preserves_insertion_order() {
        let repo = InMemoryAppointmentRepository::new();
        repo.insert(sample("a1", "u1")).await.unwrap();
        repo.insert(sample("a2", "u2")).await.unwrap();
        repo.insert(sample("a3", "u1")).await.unwrap();

        let mine = repo.find_by_user("u1").await.unwrap();
        let ids: Vec<&str> = mine.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a3"]);
    }

    #[tokio::test]
    async fn update_overwrites_mutable_fields_only() {
        let repo = InMemoryAppointmentRepository::new();
        let stored = repo.insert(sample("a1", "u1")).await.unwrap();

        let mut changed = stored.clone();
        changed.status = AppointmentStatus::Confirmed;
        changed.user_id = "someone-else".into();
        changed.updated_at = Utc::now();

        let updated = repo.update(changed).await.unwrap();
        assert_eq!(updated.status, AppointmentStatus::Confirmed);
        // requester reference is immutable after creation
        assert_eq!(updated.user_id, "u1");
    }

    #[tokio::test]
    async fn update_unknown_id_fails() {
        let repo = InMemoryAppointmentRepository::new();
        let err = repo.update(sample("ghost", "u1")).await.unwrap_err();
        assert!(matches!(err, DbError::QueryError(_)));
    }
}
