//! SQL implementation of the appointment repository
//!
//! Timestamps and the scheduled date are stored as RFC 3339 text because
//! `DateTime<Utc>` does not decode through the `sqlx::Any` driver.

use crate::error::DbError;
use crate::repositories::appointment::{Appointment, AppointmentRepository, AppointmentStatus};
use crate::DbClient;
use chrono::{DateTime, Utc};
use estatify_common::services::BoxFuture;
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, error, info};

/// SQL implementation of the appointment repository
#[derive(Debug, Clone)]
pub struct SqlAppointmentRepository {
    /// The database client
    db_client: DbClient,
}

impl SqlAppointmentRepository {
    /// Create a new SQL appointment repository
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }

    fn row_to_appointment(row: &AnyRow) -> Result<Appointment, DbError> {
        let status_text: String = row
            .try_get("status")
            .map_err(|e| DbError::QueryError(e.to_string()))?;
        // Only the three enumerated values are ever written; anything else is
        // a corrupted row, not a default.
        let status: AppointmentStatus = status_text
            .parse()
            .map_err(|_| DbError::QueryError(format!("unrecognized stored status: {status_text}")))?;

        let meeting_link: Option<String> = row.try_get("meeting_link").ok().flatten();

        Ok(Appointment {
            id: row
                .try_get("id")
                .map_err(|e| DbError::QueryError(e.to_string()))?,
            property_id: row
                .try_get("property_id")
                .map_err(|e| DbError::QueryError(e.to_string()))?,
            user_id: row
                .try_get("user_id")
                .map_err(|e| DbError::QueryError(e.to_string()))?,
            date: parse_timestamp(row, "date")?,
            status,
            meeting_link,
            created_at: parse_timestamp(row, "created_at")?,
            updated_at: parse_timestamp(row, "updated_at")?,
        })
    }
}

fn parse_timestamp(row: &AnyRow, column: &str) -> Result<DateTime<Utc>, DbError> {
    let text: String = row
        .try_get(column)
        .map_err(|e| DbError::QueryError(e.to_string()))?;
    DateTime::parse_from_rfc3339(&text)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DbError::QueryError(format!("invalid {column} timestamp: {e}")))
}

const SELECT_COLUMNS: &str =
    "id, property_id, user_id, date, status, meeting_link, created_at, updated_at";

impl AppointmentRepository for SqlAppointmentRepository {
    fn init_schema(&self) -> BoxFuture<'_, (), DbError> {
        Box::pin(async move {
            debug!("Initializing appointment schema");

            let query = r#"
                CREATE TABLE IF NOT EXISTS appointments (
                    id TEXT PRIMARY KEY,
                    property_id TEXT NOT NULL,
                    user_id TEXT NOT NULL,
                    date TEXT NOT NULL,
                    status TEXT NOT NULL,
                    meeting_link TEXT,
                    created_at TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                )
            "#;

            self.db_client.execute(query).await?;

            info!("Appointment schema initialized successfully");
            Ok(())
        })
    }

    fn insert(&self, appointment: Appointment) -> BoxFuture<'_, Appointment, DbError> {
        Box::pin(async move {
            debug!(
                "Inserting appointment {} for user {}",
                appointment.id, appointment.user_id
            );

            let query = r#"
                INSERT INTO appointments (id, property_id, user_id, date, status, meeting_link, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#;

            sqlx::query(query)
                .bind(&appointment.id)
                .bind(&appointment.property_id)
                .bind(&appointment.user_id)
                .bind(appointment.date.to_rfc3339())
                .bind(appointment.status.as_str())
                .bind(&appointment.meeting_link)
                .bind(appointment.created_at.to_rfc3339())
                .bind(appointment.updated_at.to_rfc3339())
                .execute(self.db_client.pool())
                .await
                .map_err(|e| {
                    error!("Failed to insert appointment: {}", e);
                    DbError::QueryError(e.to_string())
                })?;

            Ok(appointment)
        })
    }

    fn find_by_id(&self, id: &str) -> BoxFuture<'_, Option<Appointment>, DbError> {
        let id = id.to_string();
        Box::pin(async move {
            debug!("Finding appointment by id: {}", id);

            let query = format!(
                "SELECT {SELECT_COLUMNS} FROM appointments WHERE id = $1"
            );

            let result = sqlx::query(&query)
                .bind(&id)
                .fetch_optional(self.db_client.pool())
                .await
                .map_err(|e| {
                    error!("Failed to find appointment: {}", e);
                    DbError::QueryError(e.to_string())
                })?;

            result.map(|row| Self::row_to_appointment(&row)).transpose()
        })
    }

    fn find_by_user(&self, user_id: &str) -> BoxFuture<'_, Vec<Appointment>, DbError> {
        let user_id = user_id.to_string();
        Box::pin(async move {
            debug!("Finding appointments for user: {}", user_id);

            let query = format!(
                "SELECT {SELECT_COLUMNS} FROM appointments WHERE user_id = $1 ORDER BY created_at"
            );

            let rows = sqlx::query(&query)
                .bind(&user_id)
                .fetch_all(self.db_client.pool())
                .await
                .map_err(|e| {
                    error!("Failed to find appointments: {}", e);
                    DbError::QueryError(e.to_string())
                })?;

            rows.iter().map(Self::row_to_appointment).collect()
        })
    }

    fn find_all(&self) -> BoxFuture<'_, Vec<Appointment>, DbError> {
        Box::pin(async move {
            debug!("Finding all appointments");

            let query =
                format!("SELECT {SELECT_COLUMNS} FROM appointments ORDER BY created_at");

            let rows = sqlx::query(&query)
                .fetch_all(self.db_client.pool())
                .await
                .map_err(|e| {
                    error!("Failed to find appointments: {}", e);
                    DbError::QueryError(e.to_string())
                })?;

            rows.iter().map(Self::row_to_appointment).collect()
        })
    }

    fn update(&self, appointment: Appointment) -> BoxFuture<'_, Appointment, DbError> {
        Box::pin(async move {
            debug!("Updating appointment: {}", appointment.id);

            // The requester reference and created_at are immutable after
            // creation and are deliberately absent from the SET list.
            let query = r#"
                UPDATE appointments
                SET date = $1, status = $2, meeting_link = $3, updated_at = $4
                WHERE id = $5
            "#;

            let result = sqlx::query(query)
                .bind(appointment.date.to_rfc3339())
                .bind(appointment.status.as_str())
                .bind(&appointment.meeting_link)
                .bind(appointment.updated_at.to_rfc3339())
                .bind(&appointment.id)
                .execute(self.db_client.pool())
                .await
                .map_err(|e| {
                    error!("Failed to update appointment: {}", e);
                    DbError::QueryError(e.to_string())
                })?;

            if result.rows_affected() == 0 {
                return Err(DbError::QueryError(format!(
                    "no appointment with id {}",
                    appointment.id
                )));
            }

            info!("Appointment {} updated successfully", appointment.id);
            Ok(appointment)
        })
    }
}
