use super::*;

// =============================================================================
// ApplicationStatus
// =============================================================================

#[test]
fn status_round_trips_through_str() {
    for status in [ApplicationStatus::Pending, ApplicationStatus::Approved, ApplicationStatus::Rejected] {
        assert_eq!(ApplicationStatus::from_str(status.as_str()), Some(status));
    }
}

#[test]
fn status_from_str_rejects_unknown() {
    assert_eq!(ApplicationStatus::from_str("accepted"), None);
    assert_eq!(ApplicationStatus::from_str("PENDING"), None);
    assert_eq!(ApplicationStatus::from_str(""), None);
}

#[test]
fn status_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&ApplicationStatus::Approved).unwrap(), "\"approved\"");
}

#[test]
fn status_deserializes_lowercase() {
    let status: ApplicationStatus = serde_json::from_str("\"rejected\"").unwrap();
    assert_eq!(status, ApplicationStatus::Rejected);
}

// =============================================================================
// Row serialization
// =============================================================================

#[test]
fn applicant_row_flattens_application_fields() {
    let row = ApplicantRow {
        application: ApplicationRow {
            id: Uuid::nil(),
            event_id: Uuid::nil(),
            volunteer_id: Uuid::nil(),
            status: ApplicationStatus::Pending,
            message: Some("count me in".into()),
            created_at: None,
        },
        full_name: Some("Ada".into()),
        phone: None,
    };
    let json = serde_json::to_value(&row).unwrap();
    assert_eq!(json["status"], "pending");
    assert_eq!(json["message"], "count me in");
    assert_eq!(json["full_name"], "Ada");
    assert!(json["phone"].is_null());
}

// =============================================================================
// ApplicationError display
// =============================================================================

#[test]
fn already_applied_names_event() {
    let err = ApplicationError::AlreadyApplied(Uuid::nil());
    assert!(err.to_string().starts_with("already applied"));
}

#[test]
fn event_errors_pass_through_transparently() {
    let err = ApplicationError::Event(EventError::NotFound(Uuid::nil()));
    assert!(err.to_string().starts_with("event not found"));
}
