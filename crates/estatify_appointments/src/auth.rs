//! Caller identity extraction.
//!
//! Token issuance and verification belong to the platform's auth gateway; by
//! the time a request reaches this subsystem the gateway has validated the
//! token and injected the caller's identity as trusted headers. This module
//! extracts that identity and nothing more. Service operations take the
//! extracted identity as an explicit parameter; there is no ambient caller
//! state anywhere in the crate.

use crate::logic::{AppointmentError, Scope};
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// Header carrying the authenticated user's identifier.
pub const USER_ID_HEADER: &str = "x-user-id";
/// Header carrying the authenticated user's display name.
pub const USER_NAME_HEADER: &str = "x-user-name";
/// Header carrying the authenticated user's role.
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// The authenticated caller, as asserted by the auth gateway.
#[derive(Debug, Clone)]
pub struct CallerIdentity {
    pub user_id: String,
    pub display_name: Option<String>,
    pub role: String,
}

impl CallerIdentity {
    /// Visibility scope for this caller.
    ///
    /// Ownership is decided by requester identifier, not display name; the
    /// display name is carried for logging only.
    pub fn scope(&self, admin_role: &str) -> Scope {
        if self.role.eq_ignore_ascii_case(admin_role) {
            Scope::All
        } else {
            Scope::Own
        }
    }
}

impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = AppointmentError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = header_value(parts, USER_ID_HEADER).ok_or(AppointmentError::Unauthorized)?;
        if user_id.is_empty() {
            return Err(AppointmentError::Unauthorized);
        }

        let display_name = header_value(parts, USER_NAME_HEADER).filter(|s| !s.is_empty());
        let role = header_value(parts, USER_ROLE_HEADER).unwrap_or_default();

        Ok(CallerIdentity {
            user_id,
            display_name,
            role,
        })
    }
}

fn header_value(parts: &Parts, name: &str) -> Option<String> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.trim().to_string())
}
