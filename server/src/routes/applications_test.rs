use super::*;
use crate::services::event::EventError;

#[test]
fn application_error_status_mapping() {
    assert_eq!(
        application_error_to_status(&ApplicationError::NotFound(Uuid::nil())),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        application_error_to_status(&ApplicationError::AlreadyApplied(Uuid::nil())),
        StatusCode::CONFLICT
    );
    assert_eq!(
        application_error_to_status(&ApplicationError::InvalidStatus("maybe".into())),
        StatusCode::BAD_REQUEST
    );
}

#[test]
fn application_error_event_variants_map_through() {
    assert_eq!(
        application_error_to_status(&ApplicationError::Event(EventError::NotFound(Uuid::nil()))),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        application_error_to_status(&ApplicationError::Event(EventError::Forbidden(Uuid::nil()))),
        StatusCode::FORBIDDEN
    );
}

#[test]
fn apply_body_defaults_to_no_message() {
    let body = ApplyBody::default();
    assert!(body.message.is_none());
}

#[test]
fn update_application_body_deserializes_status() {
    let body: UpdateApplicationBody = serde_json::from_str(r#"{"status": "approved"}"#).unwrap();
    assert_eq!(body.status, "approved");
}
