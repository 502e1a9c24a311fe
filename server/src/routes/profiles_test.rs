use super::*;

#[test]
fn profile_error_status_mapping() {
    assert_eq!(
        profile_error_to_status(&ProfileError::NotFound(Uuid::nil())),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        profile_error_to_status(&ProfileError::AlreadyExists(Uuid::nil())),
        StatusCode::CONFLICT
    );
    assert_eq!(
        profile_error_to_status(&ProfileError::InvalidRole("ong".into())),
        StatusCode::BAD_REQUEST
    );
}

#[test]
fn create_profile_body_deserializes_optional_fields() {
    let body: CreateProfileBody =
        serde_json::from_str(r#"{"full_name": "Helping Hands", "role": "organization"}"#).unwrap();
    assert_eq!(body.full_name, "Helping Hands");
    assert_eq!(body.role, "organization");
    assert!(body.phone.is_none());
    assert!(body.avatar_url.is_none());
}

#[test]
fn update_profile_body_all_fields_optional() {
    let body: UpdateProfileBody = serde_json::from_str("{}").unwrap();
    assert!(body.full_name.is_none());
    assert!(body.phone.is_none());
    assert!(body.avatar_url.is_none());
}
