#[cfg(test)]
mod tests {
    use crate::auth::CallerIdentity;
    use crate::directory::StaticDirectoryService;
    use crate::logic::{AppointmentRecord, CreateAppointmentRequest, Scope};
    use crate::service::AppointmentService;
    use crate::view::{
        apply_filters, AppointmentBrowser, ListFilters, MeetingLinkFilter, StatusFilter,
    };
    use chrono::{TimeZone, Utc};
    use estatify_common::models::{
        Appointment, AppointmentStatus, PropertySummary, UserSummary,
    };
    use estatify_db::InMemoryAppointmentRepository;
    use std::sync::Arc;

    fn record(
        id: &str,
        title: &str,
        requester_name: &str,
        email: &str,
        status: AppointmentStatus,
        meeting_link: Option<&str>,
    ) -> AppointmentRecord {
        let mut appointment = Appointment::new(
            id.to_string(),
            format!("prop-{id}"),
            "u1".to_string(),
            Utc.with_ymd_and_hms(2025, 7, 1, 14, 0, 0).unwrap(),
        );
        appointment.status = status;
        appointment.meeting_link = meeting_link.map(str::to_string);
        AppointmentRecord {
            appointment,
            property: PropertySummary {
                id: format!("prop-{id}"),
                title: title.to_string(),
                location: None,
            },
            requester: UserSummary {
                id: "u1".to_string(),
                name: requester_name.to_string(),
                email: email.to_string(),
            },
        }
    }

    fn sample_records() -> Vec<AppointmentRecord> {
        vec![
            record(
                "a1",
                "Lakeview Villa",
                "Alex Smith",
                "alex@example.com",
                AppointmentStatus::Pending,
                None,
            ),
            record(
                "a2",
                "Seaside Flat",
                "Robin Doe",
                "robin@example.com",
                AppointmentStatus::Confirmed,
                Some("http://x"),
            ),
        ]
    }

    #[test]
    fn search_with_link_filters_compose_with_and() {
        let records = sample_records();

        let without_link = apply_filters(
            &records,
            &ListFilters {
                search: "villa".to_string(),
                status: StatusFilter::All,
                meeting_link: MeetingLinkFilter::WithoutLink,
            },
        );
        assert_eq!(without_link.len(), 1);
        assert_eq!(without_link[0].appointment.id, "a1");

        let with_link = apply_filters(
            &records,
            &ListFilters {
                meeting_link: MeetingLinkFilter::WithLink,
                ..ListFilters::default()
            },
        );
        assert_eq!(with_link.len(), 1);
        assert_eq!(with_link[0].appointment.id, "a2");
    }

    #[test]
    fn empty_search_matches_everything() {
        let records = sample_records();
        let all = apply_filters(&records, &ListFilters::default());
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn search_covers_title_name_and_email_case_insensitively() {
        let records = sample_records();

        for term in ["LAKEVIEW", "alex smith", "ROBIN@example.com"] {
            let hits = apply_filters(
                &records,
                &ListFilters {
                    search: term.to_string(),
                    ..ListFilters::default()
                },
            );
            assert_eq!(hits.len(), 1, "search {term:?} must match one record");
        }
    }

    #[test]
    fn status_filter_is_exact() {
        let records = sample_records();
        let confirmed = apply_filters(
            &records,
            &ListFilters {
                status: StatusFilter::Only(AppointmentStatus::Confirmed),
                ..ListFilters::default()
            },
        );
        assert_eq!(confirmed.len(), 1);
        assert_eq!(confirmed[0].appointment.id, "a2");
    }

    #[test]
    fn source_order_is_preserved() {
        let mut records = sample_records();
        records.reverse();
        let all = apply_filters(&records, &ListFilters::default());
        assert_eq!(all[0].appointment.id, "a2");
        assert_eq!(all[1].appointment.id, "a1");
    }

    // --- Browser: refresh-after-mutation ---

    fn browser_fixture() -> (Arc<AppointmentService>, CallerIdentity) {
        let directory = StaticDirectoryService::new()
            .with_property(PropertySummary {
                id: "prop-1".to_string(),
                title: "Lakeview Villa".to_string(),
                location: None,
            })
            .with_user(UserSummary {
                id: "u1".to_string(),
                name: "Alex Smith".to_string(),
                email: "alex@example.com".to_string(),
            });
        let service = Arc::new(AppointmentService::new(
            Arc::new(InMemoryAppointmentRepository::new()),
            Arc::new(directory),
        ));
        let caller = CallerIdentity {
            user_id: "u1".to_string(),
            display_name: Some("Alex Smith".to_string()),
            role: "customer".to_string(),
        };
        (service, caller)
    }

    async fn book(service: &AppointmentService, caller: &CallerIdentity) -> String {
        service
            .create_appointment(
                caller,
                CreateAppointmentRequest {
                    property_id: "prop-1".to_string(),
                    date: Utc.with_ymd_and_hms(2025, 7, 1, 14, 0, 0).unwrap(),
                },
            )
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn successful_mutation_triggers_a_refresh() {
        let (service, caller) = browser_fixture();
        let id = book(&service, &caller).await;

        let mut browser = AppointmentBrowser::new(service, caller, Scope::Own);
        browser.refresh().await.unwrap();
        assert_eq!(
            browser.visible()[0].appointment.status,
            AppointmentStatus::Pending
        );

        browser.change_status(&id, "confirmed").await.unwrap();
        // the view settled only after re-fetching the list
        assert_eq!(
            browser.visible()[0].appointment.status,
            AppointmentStatus::Confirmed
        );
        assert!(browser.take_notice().is_none());
    }

    #[tokio::test]
    async fn failed_mutation_leaves_displayed_state_unchanged() {
        let (service, caller) = browser_fixture();
        let id = book(&service, &caller).await;

        let mut browser = AppointmentBrowser::new(service, caller, Scope::Own);
        browser.refresh().await.unwrap();

        let err = browser.change_status(&id, "approved").await.unwrap_err();
        assert!(err.to_string().contains("Invalid argument"));
        // stale-but-consistent: the previous list is still shown
        assert_eq!(
            browser.visible()[0].appointment.status,
            AppointmentStatus::Pending
        );
        // and the failure surfaced as a transient notice, exactly once
        assert!(browser.take_notice().is_some());
        assert!(browser.take_notice().is_none());
    }

    #[tokio::test]
    async fn meeting_link_mutation_shows_up_after_refresh() {
        let (service, caller) = browser_fixture();
        let id = book(&service, &caller).await;

        let mut browser = AppointmentBrowser::new(service, caller, Scope::Own);
        browser.refresh().await.unwrap();

        browser.set_meeting_link(&id, "http://meet/1").await.unwrap();
        assert_eq!(
            browser.visible()[0].appointment.meeting_link.as_deref(),
            Some("http://meet/1")
        );

        browser.set_filters(ListFilters {
            meeting_link: MeetingLinkFilter::WithoutLink,
            ..ListFilters::default()
        });
        assert!(browser.visible().is_empty());
    }
}
