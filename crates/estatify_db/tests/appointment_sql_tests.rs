use chrono::{TimeZone, Utc};
use estatify_db::{
    Appointment, AppointmentRepository, AppointmentRepositoryFactory, AppointmentStatus, DbClient,
};

// Each test gets its own database file; SQLite in-memory databases are
// per-connection and do not survive the connection pool.
async fn test_repository(name: &str) -> impl AppointmentRepository {
    let path = format!("{}/{}.db", env!("CARGO_TARGET_TMPDIR"), name);
    let _ = std::fs::remove_file(&path);

    let db_client = DbClient::from_url(&format!("sqlite://{path}"))
        .await
        .expect("failed to open test database");
    let repository = AppointmentRepositoryFactory::new().from_db_client(db_client);
    repository.init_schema().await.expect("failed to init schema");
    repository
}

fn appointment(id: &str, user_id: &str, hour: u32) -> Appointment {
    let date = Utc.with_ymd_and_hms(2025, 7, 1, hour, 0, 0).unwrap();
    let mut appt = Appointment::new(id.to_string(), "prop-1".to_string(), user_id.to_string(), date);
    // deterministic bookkeeping timestamps so ordering is testable
    appt.created_at = Utc.with_ymd_and_hms(2025, 6, 1, hour, 0, 0).unwrap();
    appt.updated_at = appt.created_at;
    appt
}

#[tokio::test]
async fn insert_and_read_back_round_trip() {
    let repository = test_repository("round_trip").await;

    let mut appt = appointment("a1", "u1", 14);
    appt.meeting_link = Some("  http://meet/1  ".to_string());
    repository.insert(appt.clone()).await.unwrap();

    let stored = repository.find_by_id("a1").await.unwrap().unwrap();
    assert_eq!(stored.id, "a1");
    assert_eq!(stored.property_id, "prop-1");
    assert_eq!(stored.user_id, "u1");
    assert_eq!(stored.date, appt.date);
    assert_eq!(stored.status, AppointmentStatus::Pending);
    // the stored link is byte-for-byte what was submitted
    assert_eq!(stored.meeting_link.as_deref(), Some("  http://meet/1  "));
    assert_eq!(stored.created_at, appt.created_at);
}

#[tokio::test]
async fn missing_id_reads_as_none() {
    let repository = test_repository("missing_id").await;
    assert!(repository.find_by_id("ghost").await.unwrap().is_none());
}

#[tokio::test]
async fn listings_come_back_in_creation_order() {
    let repository = test_repository("creation_order").await;

    repository.insert(appointment("a2", "u1", 15)).await.unwrap();
    repository.insert(appointment("a1", "u1", 9)).await.unwrap();
    repository.insert(appointment("a3", "u2", 12)).await.unwrap();

    let all = repository.find_all().await.unwrap();
    let ids: Vec<&str> = all.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "a3", "a2"]);

    let mine = repository.find_by_user("u1").await.unwrap();
    let ids: Vec<&str> = mine.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "a2"]);
}

#[tokio::test]
async fn update_persists_status_and_link_but_not_requester() {
    let repository = test_repository("update_fields").await;
    repository.insert(appointment("a1", "u1", 14)).await.unwrap();

    let mut changed = repository.find_by_id("a1").await.unwrap().unwrap();
    changed.status = AppointmentStatus::Confirmed;
    changed.meeting_link = Some("http://meet/1".to_string());
    changed.user_id = "someone-else".to_string();
    changed.updated_at = Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap();
    repository.update(changed).await.unwrap();

    let stored = repository.find_by_id("a1").await.unwrap().unwrap();
    assert_eq!(stored.status, AppointmentStatus::Confirmed);
    assert_eq!(stored.meeting_link.as_deref(), Some("http://meet/1"));
    // the requester reference is immutable after creation
    assert_eq!(stored.user_id, "u1");
    assert!(stored.updated_at > stored.created_at);
}

#[tokio::test]
async fn update_of_unknown_id_fails() {
    let repository = test_repository("update_unknown").await;
    let err = repository.update(appointment("ghost", "u1", 14)).await;
    assert!(err.is_err());
}

#[tokio::test]
async fn init_schema_is_idempotent() {
    let repository = test_repository("idempotent_schema").await;
    repository.init_schema().await.unwrap();
    repository.insert(appointment("a1", "u1", 14)).await.unwrap();
    repository.init_schema().await.unwrap();
    assert_eq!(repository.find_all().await.unwrap().len(), 1);
}
