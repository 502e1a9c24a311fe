use super::*;
use crate::net::types::{Profile, Session, User};

fn signed_out() -> AuthState {
    AuthState {
        session: None,
        user: None,
        profile: ProfileSlot::Unresolved,
        loading: false,
    }
}

fn signed_in(profile: ProfileSlot) -> AuthState {
    let user = User { id: "u-1".into(), email: Some("a@b.c".into()) };
    AuthState {
        session: Some(Session { user: user.clone() }),
        user: Some(user),
        profile,
        loading: false,
    }
}

fn with_role(role: Role) -> ProfileSlot {
    ProfileSlot::Present(Profile {
        id: "u-1".into(),
        full_name: "Ada".into(),
        role,
        phone: None,
        avatar_url: None,
        is_deleted: false,
        created_at: None,
    })
}

// =============================================================
// Loading and unauthenticated rows of the table
// =============================================================

#[test]
fn loading_always_waits() {
    let state = AuthState::default();
    assert_eq!(decide(&state, None), RouteDecision::Wait);
    assert_eq!(decide(&state, Some(Role::Admin)), RouteDecision::Wait);
}

#[test]
fn signed_out_goes_to_sign_in_regardless_of_role() {
    let state = signed_out();
    assert_eq!(decide(&state, None), RouteDecision::SignIn);
    assert_eq!(decide(&state, Some(Role::Volunteer)), RouteDecision::SignIn);
}

// =============================================================
// Authenticated, no role restriction
// =============================================================

#[test]
fn any_signed_in_user_passes_an_unrestricted_route() {
    assert_eq!(decide(&signed_in(ProfileSlot::Unresolved), None), RouteDecision::Allow);
    assert_eq!(decide(&signed_in(ProfileSlot::Absent), None), RouteDecision::Allow);
    assert_eq!(decide(&signed_in(with_role(Role::Volunteer)), None), RouteDecision::Allow);
}

// =============================================================
// Authenticated, role-restricted
// =============================================================

#[test]
fn matching_role_is_allowed() {
    let state = signed_in(with_role(Role::Organization));
    assert_eq!(decide(&state, Some(Role::Organization)), RouteDecision::Allow);
}

#[test]
fn mismatched_role_is_unauthorized() {
    let state = signed_in(with_role(Role::Volunteer));
    assert_eq!(decide(&state, Some(Role::Organization)), RouteDecision::Unauthorized);
    assert_eq!(decide(&state, Some(Role::Admin)), RouteDecision::Unauthorized);
}

#[test]
fn admin_role_is_not_a_wildcard() {
    let state = signed_in(with_role(Role::Admin));
    assert_eq!(decide(&state, Some(Role::Organization)), RouteDecision::Unauthorized);
}

#[test]
fn unresolved_profile_waits_instead_of_misreading_a_mismatch() {
    let state = signed_in(ProfileSlot::Unresolved);
    assert_eq!(decide(&state, Some(Role::Volunteer)), RouteDecision::Wait);
}

#[test]
fn absent_profile_waits_on_role_restricted_routes() {
    // An account with no profile row has no role to compare; the route
    // holds its placeholder rather than bouncing to unauthorized.
    let state = signed_in(ProfileSlot::Absent);
    assert_eq!(decide(&state, Some(Role::Admin)), RouteDecision::Wait);
}
