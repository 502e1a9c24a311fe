use super::*;

#[test]
fn profile_endpoint_formats_expected_path() {
    assert_eq!(profile_endpoint("u123"), "/api/profiles/u123");
}

#[test]
fn event_endpoints_format_expected_paths() {
    assert_eq!(event_endpoint("e1"), "/api/events/e1");
    assert_eq!(apply_endpoint("e1"), "/api/events/e1/apply");
    assert_eq!(applicants_endpoint("e1"), "/api/events/e1/applications");
}

#[test]
fn application_endpoint_formats_expected_path() {
    assert_eq!(application_endpoint("a9"), "/api/applications/a9");
}

#[test]
fn admin_endpoints_format_expected_paths() {
    assert_eq!(role_endpoint("u1"), "/api/admin/users/u1/role");
    assert_eq!(deleted_endpoint("u1"), "/api/admin/users/u1/deleted");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("login", 401), "login failed: 401");
}

#[test]
fn event_draft_holds_form_fields() {
    let draft = EventDraft {
        title: "Cleanup".into(),
        description: "Beach cleanup".into(),
        location: "Pier".into(),
        event_date: "2026-09-12T09:00".into(),
        image_url: String::new(),
    };
    assert_eq!(draft.title, "Cleanup");
    assert!(draft.image_url.is_empty());
}
