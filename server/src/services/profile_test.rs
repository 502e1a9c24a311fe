use super::*;

// =============================================================================
// Role
// =============================================================================

#[test]
fn role_round_trips_through_str() {
    for role in [Role::Volunteer, Role::Organization, Role::Admin] {
        assert_eq!(Role::from_str(role.as_str()), Some(role));
    }
}

#[test]
fn role_from_str_rejects_unknown() {
    assert_eq!(Role::from_str("ong"), None);
    assert_eq!(Role::from_str("ADMIN"), None);
    assert_eq!(Role::from_str(""), None);
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Organization).unwrap(), "\"organization\"");
}

#[test]
fn role_deserializes_lowercase() {
    let role: Role = serde_json::from_str("\"admin\"").unwrap();
    assert_eq!(role, Role::Admin);
}

// =============================================================================
// ProfileRow serialization
// =============================================================================

#[test]
fn profile_row_serializes_role_as_string() {
    let profile = ProfileRow {
        id: Uuid::nil(),
        full_name: "Ada".into(),
        role: Role::Volunteer,
        phone: None,
        avatar_url: None,
        is_deleted: false,
        created_at: Some("2026-01-01".into()),
    };
    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(json["role"], "volunteer");
    assert_eq!(json["full_name"], "Ada");
    assert_eq!(json["is_deleted"], false);
}

#[test]
fn admin_user_row_flattens_profile_fields() {
    let row = AdminUserRow {
        profile: ProfileRow {
            id: Uuid::nil(),
            full_name: "Grace".into(),
            role: Role::Admin,
            phone: Some("555".into()),
            avatar_url: None,
            is_deleted: true,
            created_at: None,
        },
        email: Some("grace@example.com".into()),
    };
    let json = serde_json::to_value(&row).unwrap();
    assert_eq!(json["full_name"], "Grace");
    assert_eq!(json["email"], "grace@example.com");
    assert_eq!(json["is_deleted"], true);
}

// =============================================================================
// ProfileError display
// =============================================================================

#[test]
fn profile_error_not_found_names_user() {
    let err = ProfileError::NotFound(Uuid::nil());
    assert!(err.to_string().contains("00000000-0000-0000-0000-000000000000"));
}

#[test]
fn profile_error_invalid_role_names_value() {
    let err = ProfileError::InvalidRole("ong".into());
    assert!(err.to_string().contains("ong"));
}
