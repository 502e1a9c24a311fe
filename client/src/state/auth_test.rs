use super::*;
use crate::net::types::Role;

fn session_for(user_id: &str) -> Session {
    Session {
        user: User { id: user_id.to_owned(), email: Some(format!("{user_id}@example.com")) },
    }
}

fn profile_for(user_id: &str, role: Role) -> Profile {
    Profile {
        id: user_id.to_owned(),
        full_name: "Ada Lovelace".into(),
        role,
        phone: None,
        avatar_url: None,
        is_deleted: false,
        created_at: None,
    }
}

// =============================================================
// Initial resolution
// =============================================================

#[test]
fn store_starts_loading_with_nothing_known() {
    let store = SessionStore::new();
    let state = store.snapshot();
    assert!(state.loading);
    assert!(state.session.is_none());
    assert!(state.user.is_none());
    assert_eq!(state.profile, ProfileSlot::Unresolved);
    assert!(!state.is_authenticated());
}

#[test]
fn initial_none_delivery_settles_unauthenticated() {
    let mut store = SessionStore::new();
    assert!(store.deliver(None).is_none());
    let state = store.snapshot();
    assert!(!state.loading);
    assert!(state.user.is_none());
}

#[test]
fn initial_session_stays_loading_until_profile_resolves() {
    let mut store = SessionStore::new();
    let ticket = store.deliver(Some(session_for("u-1"))).unwrap();
    assert_eq!(ticket.user_id, "u-1");
    assert!(store.snapshot().loading);

    assert!(store.complete_profile(&ticket, Some(profile_for("u-1", Role::Volunteer))));
    let state = store.snapshot();
    assert!(!state.loading);
    assert!(state.is_authenticated());
    assert_eq!(state.profile.profile().map(|p| p.role), Some(Role::Volunteer));
}

#[test]
fn missing_profile_resolves_to_absent_not_error() {
    let mut store = SessionStore::new();
    let ticket = store.deliver(Some(session_for("u-1"))).unwrap();
    assert!(store.complete_profile(&ticket, None));
    let state = store.snapshot();
    assert!(!state.loading);
    assert!(state.is_authenticated());
    assert_eq!(state.profile, ProfileSlot::Absent);
}

// =============================================================
// Supersession
// =============================================================

#[test]
fn stale_profile_result_is_discarded_after_newer_delivery() {
    let mut store = SessionStore::new();
    let old_ticket = store.deliver(Some(session_for("u-1"))).unwrap();
    let new_ticket = store.deliver(Some(session_for("u-2"))).unwrap();

    // The fetch for u-1 loses the race and must not apply.
    assert!(!store.complete_profile(&old_ticket, Some(profile_for("u-1", Role::Admin))));
    assert_eq!(store.snapshot().profile, ProfileSlot::Unresolved);

    assert!(store.complete_profile(&new_ticket, Some(profile_for("u-2", Role::Volunteer))));
    assert_eq!(store.snapshot().profile.profile().map(|p| p.id.as_str()), Some("u-2"));
}

#[test]
fn stale_result_arriving_after_fresh_result_is_discarded() {
    let mut store = SessionStore::new();
    let old_ticket = store.deliver(Some(session_for("u-1"))).unwrap();
    let new_ticket = store.deliver(Some(session_for("u-2"))).unwrap();

    assert!(store.complete_profile(&new_ticket, Some(profile_for("u-2", Role::Organization))));
    assert!(!store.complete_profile(&old_ticket, Some(profile_for("u-1", Role::Admin))));

    let state = store.snapshot();
    assert_eq!(state.profile.profile().map(|p| p.role), Some(Role::Organization));
}

#[test]
fn sign_out_invalidates_in_flight_profile_fetch() {
    let mut store = SessionStore::new();
    let ticket = store.deliver(Some(session_for("u-1"))).unwrap();

    store.begin_sign_out();
    assert!(store.snapshot().loading);

    // Late fetch result for the outgoing user must not resurrect state.
    assert!(!store.complete_profile(&ticket, Some(profile_for("u-1", Role::Admin))));

    store.finish_sign_out();
    let state = store.snapshot();
    assert!(!state.loading);
    assert!(state.session.is_none());
    assert!(state.user.is_none());
    assert_eq!(state.profile, ProfileSlot::Unresolved);
}

#[test]
fn none_delivery_invalidates_in_flight_profile_fetch() {
    let mut store = SessionStore::new();
    let ticket = store.deliver(Some(session_for("u-1"))).unwrap();
    assert!(store.deliver(None).is_none());

    assert!(!store.complete_profile(&ticket, Some(profile_for("u-1", Role::Volunteer))));
    let state = store.snapshot();
    assert!(state.user.is_none());
    assert_eq!(state.profile, ProfileSlot::Unresolved);
}

// =============================================================
// Idempotent redelivery
// =============================================================

#[test]
fn redelivering_identical_session_is_a_no_op() {
    let mut store = SessionStore::new();
    let ticket = store.deliver(Some(session_for("u-1"))).unwrap();
    assert!(store.complete_profile(&ticket, Some(profile_for("u-1", Role::Volunteer))));

    let before = store.snapshot().clone();
    assert!(store.deliver(Some(session_for("u-1"))).is_none());
    assert_eq!(store.snapshot(), &before);
}

#[test]
fn redelivery_before_profile_resolves_keeps_the_fetch_valid() {
    let mut store = SessionStore::new();
    let ticket = store.deliver(Some(session_for("u-1"))).unwrap();
    // The channel repeats the same session while the fetch is in flight.
    assert!(store.deliver(Some(session_for("u-1"))).is_none());

    assert!(store.complete_profile(&ticket, Some(profile_for("u-1", Role::Volunteer))));
    assert!(store.snapshot().profile.profile().is_some());
}

#[test]
fn redelivery_during_initial_load_changes_nothing() {
    let mut store = SessionStore::new();
    let ticket = store.deliver(Some(session_for("u-1"))).unwrap();
    let before = store.snapshot().clone();

    // Still loading, profile unresolved; the repeat must not produce a new
    // ticket or disturb the snapshot.
    assert!(store.deliver(Some(session_for("u-1"))).is_none());
    assert_eq!(store.snapshot(), &before);
    assert!(store.snapshot().loading);

    // And the original fetch still settles the state.
    assert!(store.complete_profile(&ticket, Some(profile_for("u-1", Role::Volunteer))));
    assert!(!store.snapshot().loading);
}

#[test]
fn redelivering_none_when_signed_out_is_a_no_op() {
    let mut store = SessionStore::new();
    store.deliver(None);
    let before = store.snapshot().clone();
    assert!(store.deliver(None).is_none());
    assert_eq!(store.snapshot(), &before);
}

// =============================================================
// Atomic clear
// =============================================================

#[test]
fn none_delivery_clears_session_user_and_profile_together() {
    let mut store = SessionStore::new();
    let ticket = store.deliver(Some(session_for("u-1"))).unwrap();
    store.complete_profile(&ticket, Some(profile_for("u-1", Role::Admin)));

    store.deliver(None);
    let state = store.snapshot();
    assert!(state.session.is_none());
    assert!(state.user.is_none());
    assert_eq!(state.profile, ProfileSlot::Unresolved);
    assert!(!state.loading);
}

#[test]
fn user_switch_drops_previous_profile_before_new_one_resolves() {
    let mut store = SessionStore::new();
    let ticket = store.deliver(Some(session_for("u-1"))).unwrap();
    store.complete_profile(&ticket, Some(profile_for("u-1", Role::Admin)));

    let ticket = store.deliver(Some(session_for("u-2"))).unwrap();
    // The admin profile of u-1 must not be visible while u-2 resolves.
    assert_eq!(store.snapshot().profile, ProfileSlot::Unresolved);
    assert_eq!(store.snapshot().user.as_ref().map(|u| u.id.as_str()), Some("u-2"));

    store.complete_profile(&ticket, None);
    assert_eq!(store.snapshot().profile, ProfileSlot::Absent);
}

// =============================================================
// Refresh
// =============================================================

#[test]
fn refresh_keeps_old_profile_visible_until_result_lands() {
    let mut store = SessionStore::new();
    let ticket = store.deliver(Some(session_for("u-1"))).unwrap();
    store.complete_profile(&ticket, None);
    assert_eq!(store.snapshot().profile, ProfileSlot::Absent);

    // Profile row created out of band (org registration), then refreshed.
    let refresh = store.refresh_ticket().unwrap();
    assert_eq!(refresh.user_id, "u-1");
    assert_eq!(store.snapshot().profile, ProfileSlot::Absent);

    store.complete_profile(&refresh, Some(profile_for("u-1", Role::Organization)));
    assert_eq!(store.snapshot().profile.profile().map(|p| p.role), Some(Role::Organization));
}

#[test]
fn refresh_supersedes_earlier_in_flight_fetch() {
    let mut store = SessionStore::new();
    let initial = store.deliver(Some(session_for("u-1"))).unwrap();
    let refresh = store.refresh_ticket().unwrap();

    assert!(!store.complete_profile(&initial, None));
    assert!(store.complete_profile(&refresh, Some(profile_for("u-1", Role::Volunteer))));
    assert!(store.snapshot().profile.profile().is_some());
}

#[test]
fn refresh_without_user_is_a_no_op() {
    let mut store = SessionStore::new();
    store.deliver(None);
    assert!(store.refresh_ticket().is_none());
}
