use super::*;

// =============================================================================
// normalize_email
// =============================================================================

#[test]
fn normalize_email_lowercases_and_trims() {
    assert_eq!(normalize_email("  Alice@Example.COM "), Some("alice@example.com".into()));
}

#[test]
fn normalize_email_rejects_missing_at() {
    assert_eq!(normalize_email("alice.example.com"), None);
}

#[test]
fn normalize_email_rejects_empty_local_part() {
    assert_eq!(normalize_email("@example.com"), None);
}

#[test]
fn normalize_email_rejects_empty_domain() {
    assert_eq!(normalize_email("alice@"), None);
}

#[test]
fn normalize_email_rejects_double_at() {
    assert_eq!(normalize_email("a@b@c"), None);
}

#[test]
fn normalize_email_rejects_empty() {
    assert_eq!(normalize_email("   "), None);
}

// =============================================================================
// password hashing
// =============================================================================

#[test]
fn generate_salt_is_32_hex_chars() {
    let salt = generate_salt();
    assert_eq!(salt.len(), 32);
    assert!(salt.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_salt_two_calls_differ() {
    assert_ne!(generate_salt(), generate_salt());
}

#[test]
fn hash_password_is_deterministic() {
    assert_eq!(hash_password("salt", "hunter22"), hash_password("salt", "hunter22"));
}

#[test]
fn hash_password_differs_by_salt() {
    assert_ne!(hash_password("salt-a", "hunter22"), hash_password("salt-b", "hunter22"));
}

#[test]
fn hash_password_differs_by_password() {
    assert_ne!(hash_password("salt", "hunter22"), hash_password("salt", "hunter23"));
}

#[test]
fn hash_password_is_sha256_hex() {
    let digest = hash_password("", "");
    assert_eq!(digest.len(), 64);
    assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
}

// =============================================================================
// default_avatar_url
// =============================================================================

#[test]
fn default_avatar_url_embeds_seed() {
    let url = default_avatar_url("Ada");
    assert!(url.contains("seed=Ada"));
}

#[test]
fn default_avatar_url_sanitizes_non_alphanumerics() {
    let url = default_avatar_url("Ada Lovelace");
    assert!(url.ends_with("seed=Ada-Lovelace"));
}

// =============================================================================
// GoogleConfig
// =============================================================================

#[test]
fn authorize_url_contains_client_and_state() {
    let config = GoogleConfig {
        client_id: "cid-123".into(),
        client_secret: "secret".into(),
        redirect_uri: "http://localhost/cb".into(),
    };
    let url = config.authorize_url("csrf-token");
    assert!(url.contains("client_id=cid-123"));
    assert!(url.contains("state=csrf-token"));
    assert!(url.contains("redirect_uri=http://localhost/cb"));
    assert!(!url.contains("secret"));
}

#[test]
fn auth_error_display_hides_credentials_detail() {
    let err = AuthError::InvalidCredentials;
    assert_eq!(err.to_string(), "invalid email or password");
}
