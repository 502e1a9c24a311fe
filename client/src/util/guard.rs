//! Route admission decisions.
//!
//! Pure function over the auth snapshot so the full truth table is testable
//! without a reactive runtime. `components::protected_route` turns the
//! decision into navigation.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::Role;
use crate::state::auth::{AuthState, ProfileSlot};

/// What a protected route should do for the current auth snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Auth state is still resolving; render the placeholder, do not
    /// redirect.
    Wait,
    /// Render the protected content.
    Allow,
    /// No signed-in user; send to the login page.
    SignIn,
    /// Signed in, but the profile's role does not match; send to the
    /// unauthorized page.
    Unauthorized,
}

/// Decide admission for a route, optionally restricted to one role.
///
/// A role-restricted route only ever redirects to unauthorized on a
/// *resolved* profile with the wrong role. While the profile is unresolved,
/// or when the account has no profile row at all, the route keeps waiting;
/// an absent profile carries no role and must not read as a mismatch.
#[must_use]
pub fn decide(state: &AuthState, required_role: Option<Role>) -> RouteDecision {
    if state.loading {
        return RouteDecision::Wait;
    }
    if state.user.is_none() {
        return RouteDecision::SignIn;
    }
    let Some(required) = required_role else {
        return RouteDecision::Allow;
    };
    match &state.profile {
        ProfileSlot::Present(profile) if profile.role == required => RouteDecision::Allow,
        ProfileSlot::Present(_) => RouteDecision::Unauthorized,
        ProfileSlot::Unresolved | ProfileSlot::Absent => RouteDecision::Wait,
    }
}
