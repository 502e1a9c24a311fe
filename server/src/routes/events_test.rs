use super::*;

#[test]
fn event_error_status_mapping() {
    assert_eq!(event_error_to_status(&EventError::NotFound(Uuid::nil())), StatusCode::NOT_FOUND);
    assert_eq!(event_error_to_status(&EventError::Forbidden(Uuid::nil())), StatusCode::FORBIDDEN);
}

fn body(title: &str, location: &str, event_date: &str) -> EventBody {
    EventBody {
        title: title.into(),
        description: None,
        location: location.into(),
        event_date: event_date.into(),
        image_url: None,
    }
}

#[test]
fn validate_event_body_accepts_complete_body() {
    assert!(validate_event_body(&body("Cleanup", "Pier", "2026-09-12T09:00:00Z")).is_ok());
}

#[test]
fn validate_event_body_rejects_blank_title() {
    assert_eq!(
        validate_event_body(&body("   ", "Pier", "2026-09-12T09:00:00Z")),
        Err(StatusCode::BAD_REQUEST)
    );
}

#[test]
fn validate_event_body_rejects_blank_location() {
    assert_eq!(
        validate_event_body(&body("Cleanup", "", "2026-09-12T09:00:00Z")),
        Err(StatusCode::BAD_REQUEST)
    );
}

#[test]
fn validate_event_body_rejects_blank_date() {
    assert_eq!(validate_event_body(&body("Cleanup", "Pier", " ")), Err(StatusCode::BAD_REQUEST));
}

#[test]
fn event_body_deserializes_optional_fields() {
    let body: EventBody = serde_json::from_str(
        r#"{"title": "Cleanup", "location": "Pier", "event_date": "2026-09-12T09:00:00Z"}"#,
    )
    .unwrap();
    assert!(body.description.is_none());
    assert!(body.image_url.is_none());
}
