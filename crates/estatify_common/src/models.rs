// This file contains data structures and models that are common across the application.
// The appointment entity lives here so the db crate and the appointments crate
// can share it without depending on each other.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The lifecycle stage of an appointment.
///
/// `Pending` is the initial state set at creation. `Confirmed` and `Cancelled`
/// are reached through the status-change operation; no state is ever removed
/// from a record, only overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
}

/// Error returned when parsing a status string that is not one of the
/// enumerated values.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized appointment status: {0}")]
pub struct ParseAppointmentStatusError(pub String);

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    /// Whether a transition from `self` to `next` is permitted.
    ///
    /// Every transition is currently allowed, including leaving `Cancelled`.
    /// A future guard (e.g. rejecting `Cancelled` -> `Confirmed`) belongs
    /// here and nowhere else.
    pub fn can_transition_to(&self, _next: AppointmentStatus) -> bool {
        true
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = ParseAppointmentStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(AppointmentStatus::Pending),
            "confirmed" => Ok(AppointmentStatus::Confirmed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            other => Err(ParseAppointmentStatusError(other.to_string())),
        }
    }
}

/// A scheduled property-viewing request tying one user to one property.
///
/// The requester reference is immutable after creation. The meeting link is
/// absent until assigned; once set it may be overwritten but is never
/// implicitly cleared, and a stored link is always non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Appointment {
    /// The unique identifier for this appointment
    pub id: String,

    /// The property being viewed
    pub property_id: String,

    /// The user who created the request
    pub user_id: String,

    /// The date and time the viewing refers to
    pub date: DateTime<Utc>,

    /// The lifecycle status
    pub status: AppointmentStatus,

    /// Operator-supplied meeting point, attached post-creation
    pub meeting_link: Option<String>,

    /// The timestamp when this appointment was created
    pub created_at: DateTime<Utc>,

    /// The timestamp when this appointment was last updated
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    /// Create a new appointment in the initial `Pending` state.
    pub fn new(id: String, property_id: String, user_id: String, date: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            id,
            property_id,
            user_id,
            date,
            status: AppointmentStatus::Pending,
            meeting_link: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Summary of a property record resolved from the platform directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PropertySummary {
    pub id: String,
    pub title: String,
    pub location: Option<String>,
}

impl PropertySummary {
    /// Placeholder used when the directory cannot resolve a reference.
    pub fn unresolved(id: &str) -> Self {
        Self {
            id: id.to_string(),
            title: String::new(),
            location: None,
        }
    }
}

/// Summary of a user record resolved from the platform directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl UserSummary {
    /// Placeholder used when the directory cannot resolve a reference.
    pub fn unresolved(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: String::new(),
            email: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            AppointmentStatus::Pending,
            AppointmentStatus::Confirmed,
            AppointmentStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<AppointmentStatus>(), Ok(status));
        }
    }

    #[test]
    fn unknown_status_does_not_parse() {
        assert!("approved".parse::<AppointmentStatus>().is_err());
        assert!("Pending".parse::<AppointmentStatus>().is_err());
        assert!("".parse::<AppointmentStatus>().is_err());
    }

    #[test]
    fn every_transition_is_permitted() {
        let all = [
            AppointmentStatus::Pending,
            AppointmentStatus::Confirmed,
            AppointmentStatus::Cancelled,
        ];
        for from in all {
            for to in all {
                assert!(from.can_transition_to(to), "{from} -> {to} must be permitted");
            }
        }
    }

    #[test]
    fn new_appointment_starts_pending_without_link() {
        let appt = Appointment::new(
            "a1".into(),
            "prop-1".into(),
            "user-1".into(),
            Utc::now(),
        );
        assert_eq!(appt.status, AppointmentStatus::Pending);
        assert!(appt.meeting_link.is_none());
        assert_eq!(appt.created_at, appt.updated_at);
    }
}
