//! Client view over the appointment book.
//!
//! Presentation-layer filtering composed over the already role-scoped list
//! returned by the service, plus the browser type that owns the
//! refresh-after-mutation pattern: every successful mutation re-fetches the
//! full list before the view is considered settled, and a failed mutation
//! leaves the previously displayed list untouched.

use crate::auth::CallerIdentity;
use crate::logic::{AppointmentError, AppointmentRecord, Scope};
use crate::service::AppointmentService;
use estatify_common::models::AppointmentStatus;
use std::sync::Arc;

/// Status filter applied by the client view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(AppointmentStatus),
}

/// Meeting-link filter applied by the client view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeetingLinkFilter {
    #[default]
    All,
    /// Records with a non-empty meeting link.
    WithLink,
    /// Records with no meeting link.
    WithoutLink,
}

/// The three composable filters of the appointment view.
///
/// All filters combine with logical AND; ordering of the source list is
/// preserved.
#[derive(Debug, Clone, Default)]
pub struct ListFilters {
    /// Case-insensitive substring match against property title, requester
    /// name or requester email. Empty matches everything.
    pub search: String,
    pub status: StatusFilter,
    pub meeting_link: MeetingLinkFilter,
}

fn matches_search(record: &AppointmentRecord, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    record.property.title.to_lowercase().contains(&needle)
        || record.requester.name.to_lowercase().contains(&needle)
        || record.requester.email.to_lowercase().contains(&needle)
}

fn matches_status(record: &AppointmentRecord, filter: StatusFilter) -> bool {
    match filter {
        StatusFilter::All => true,
        StatusFilter::Only(status) => record.appointment.status == status,
    }
}

fn matches_meeting_link(record: &AppointmentRecord, filter: MeetingLinkFilter) -> bool {
    let has_link = record
        .appointment
        .meeting_link
        .as_deref()
        .is_some_and(|link| !link.is_empty());
    match filter {
        MeetingLinkFilter::All => true,
        MeetingLinkFilter::WithLink => has_link,
        MeetingLinkFilter::WithoutLink => !has_link,
    }
}

/// Apply the composed filters to an already-fetched list.
pub fn apply_filters(records: &[AppointmentRecord], filters: &ListFilters) -> Vec<AppointmentRecord> {
    records
        .iter()
        .filter(|record| {
            matches_search(record, &filters.search)
                && matches_status(record, filters.status)
                && matches_meeting_link(record, filters.meeting_link)
        })
        .cloned()
        .collect()
}

/// Client-side browser over the appointment book.
///
/// Holds the last successfully fetched list and the active filters. The
/// displayed state only ever advances through `refresh`, so it reflects the
/// store as of the most recent successful mutation.
pub struct AppointmentBrowser {
    service: Arc<AppointmentService>,
    caller: CallerIdentity,
    scope: Scope,
    filters: ListFilters,
    records: Vec<AppointmentRecord>,
    notice: Option<String>,
}

impl AppointmentBrowser {
    pub fn new(service: Arc<AppointmentService>, caller: CallerIdentity, scope: Scope) -> Self {
        Self {
            service,
            caller,
            scope,
            filters: ListFilters::default(),
            records: Vec::new(),
            notice: None,
        }
    }

    /// Re-fetch the full list from the service.
    pub async fn refresh(&mut self) -> Result<(), AppointmentError> {
        self.records = self
            .service
            .list_appointments(&self.caller, self.scope)
            .await?;
        Ok(())
    }

    pub fn set_filters(&mut self, filters: ListFilters) {
        self.filters = filters;
    }

    /// The currently visible records: the last fetched list with the active
    /// filters applied, in fetch order.
    pub fn visible(&self) -> Vec<AppointmentRecord> {
        apply_filters(&self.records, &self.filters)
    }

    /// The transient notification from the last failed operation, if any.
    /// Reading it clears it.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    /// Change an appointment's status, then re-fetch the list.
    pub async fn change_status(
        &mut self,
        appointment_id: &str,
        requested_status: &str,
    ) -> Result<(), AppointmentError> {
        let result = self
            .service
            .change_status(&self.caller, appointment_id, requested_status)
            .await;
        self.settle(result).await
    }

    /// Set an appointment's meeting link, then re-fetch the list.
    pub async fn set_meeting_link(
        &mut self,
        appointment_id: &str,
        link: &str,
    ) -> Result<(), AppointmentError> {
        let result = self
            .service
            .set_meeting_link(&self.caller, appointment_id, link)
            .await;
        self.settle(result).await
    }

    // A mutation is only settled once the follow-up refresh succeeds. On
    // failure the displayed records stay exactly as they were.
    async fn settle<T>(&mut self, result: Result<T, AppointmentError>) -> Result<(), AppointmentError> {
        match result {
            Ok(_) => self.refresh().await,
            Err(e) => {
                self.notice = Some(e.to_string());
                Err(e)
            }
        }
    }
}
