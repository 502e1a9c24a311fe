use super::*;

#[test]
fn set_role_body_deserializes() {
    let body: SetRoleBody = serde_json::from_str(r#"{"role": "organization"}"#).unwrap();
    assert_eq!(body.role, "organization");
}

#[test]
fn set_deleted_body_deserializes_both_states() {
    let body: SetDeletedBody = serde_json::from_str(r#"{"is_deleted": true}"#).unwrap();
    assert!(body.is_deleted);
    let body: SetDeletedBody = serde_json::from_str(r#"{"is_deleted": false}"#).unwrap();
    assert!(!body.is_deleted);
}

#[test]
fn unknown_role_is_rejected_before_db() {
    // The handler parses the role before any query; this mirrors that check.
    assert!(Role::from_str("superuser").is_none());
}
