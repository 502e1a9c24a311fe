use super::*;

// =============================================================
// Role / ApplicationStatus
// =============================================================

#[test]
fn role_deserializes_lowercase() {
    let role: Role = serde_json::from_str("\"organization\"").unwrap();
    assert_eq!(role, Role::Organization);
}

#[test]
fn role_as_str_matches_wire_form() {
    for role in [Role::Volunteer, Role::Organization, Role::Admin] {
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, format!("\"{}\"", role.as_str()));
    }
}

#[test]
fn role_rejects_unknown_value() {
    assert!(serde_json::from_str::<Role>("\"ong\"").is_err());
}

#[test]
fn status_wire_form_matches_serde() {
    for status in
        [ApplicationStatus::Pending, ApplicationStatus::Approved, ApplicationStatus::Rejected]
    {
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, format!("\"{}\"", status.as_wire()));
    }
}

#[test]
fn status_labels_are_title_case() {
    assert_eq!(ApplicationStatus::Pending.label(), "Pending");
    assert_eq!(ApplicationStatus::Approved.label(), "Approved");
    assert_eq!(ApplicationStatus::Rejected.label(), "Rejected");
}

// =============================================================
// Session / Profile payloads
// =============================================================

#[test]
fn session_deserializes_server_payload() {
    let session: Session =
        serde_json::from_str(r#"{"user": {"id": "u-1", "email": "a@b.c"}}"#).unwrap();
    assert_eq!(session.user.id, "u-1");
    assert_eq!(session.user.email.as_deref(), Some("a@b.c"));
}

#[test]
fn session_user_email_may_be_null() {
    let session: Session = serde_json::from_str(r#"{"user": {"id": "u-1", "email": null}}"#).unwrap();
    assert!(session.user.email.is_none());
}

#[test]
fn profile_is_deleted_defaults_false() {
    let profile: Profile = serde_json::from_str(
        r#"{"id": "u-1", "full_name": "Ada", "role": "volunteer",
            "phone": null, "avatar_url": null, "created_at": null}"#,
    )
    .unwrap();
    assert!(!profile.is_deleted);
    assert_eq!(profile.role, Role::Volunteer);
}

#[test]
fn applicant_flattened_join_deserializes() {
    let applicant: Applicant = serde_json::from_str(
        r#"{"id": "a-1", "event_id": "e-1", "volunteer_id": "u-1",
            "status": "pending", "message": null, "created_at": null,
            "full_name": "Ada", "phone": "555"}"#,
    )
    .unwrap();
    assert_eq!(applicant.status, ApplicationStatus::Pending);
    assert_eq!(applicant.full_name.as_deref(), Some("Ada"));
}

#[test]
fn event_round_trips() {
    let event = Event {
        id: "e-1".into(),
        organizer_id: "u-2".into(),
        title: "Cleanup".into(),
        description: None,
        location: "Pier".into(),
        event_date: "2026-09-12T09:00:00Z".into(),
        image_url: None,
        created_at: None,
    };
    let json = serde_json::to_string(&event).unwrap();
    let restored: Event = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, event);
}
