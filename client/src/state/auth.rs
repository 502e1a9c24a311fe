//! Auth-session state for the current browser user.
//!
//! ARCHITECTURE
//! ============
//! `SessionStore` is a synchronous state machine over the observable
//! snapshot `{session, user, profile, loading}`. The async plumbing
//! (`state::provider`) feeds it session-change deliveries and profile fetch
//! results; consumers only ever read the snapshot through the reactive
//! context. Single writer, many readers.
//!
//! ORDERING
//! ========
//! Every delivery takes a monotonically increasing sequence number, carried
//! on the `FetchTicket` handed back to the caller. A profile fetch that
//! completes with a stale ticket is discarded, so a slow fetch for an old
//! session can never overwrite state set by a newer delivery.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Profile, Session, User};

/// The profile portion of the snapshot.
///
/// `Unresolved` means a fetch may still be in flight; `Absent` means the
/// store finished resolving and found no row. The distinction matters to the
/// route guard: an unresolved profile must never read as a role mismatch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ProfileSlot {
    #[default]
    Unresolved,
    Absent,
    Present(Profile),
}

impl ProfileSlot {
    #[must_use]
    pub fn profile(&self) -> Option<&Profile> {
        match self {
            Self::Present(profile) => Some(profile),
            Self::Unresolved | Self::Absent => None,
        }
    }
}

/// Authentication snapshot observed by route guards and pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub user: Option<User>,
    pub profile: ProfileSlot,
    /// True from store creation until the initial session resolution (or an
    /// explicit sign-out) settles. Routine session-change notifications do
    /// not re-enter loading.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, user: None, profile: ProfileSlot::Unresolved, loading: true }
    }
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.user.is_some()
    }
}

/// Permission to apply one profile fetch result. Stale tickets are rejected.
#[derive(Debug)]
pub struct FetchTicket {
    seq: u64,
    pub user_id: String,
}

/// The session/profile state machine.
#[derive(Debug, Default)]
pub struct SessionStore {
    state: AuthState,
    latest_seq: u64,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn snapshot(&self) -> &AuthState {
        &self.state
    }

    /// Deliver a session-change notification (initial fetch result or a
    /// push from the auth channel).
    ///
    /// Returns a ticket when the caller must fetch the profile for the
    /// session's user. Redelivery of an unchanged session is a no-op and
    /// returns `None`; a session without a user clears session, user, and
    /// profile in the same update.
    pub fn deliver(&mut self, session: Option<Session>) -> Option<FetchTicket> {
        // Identical redelivery is a no-op even while the initial profile
        // fetch is still in flight; bumping the sequence here would strand
        // that fetch. Only the first `None` delivery has work left to do
        // (ending the loading phase).
        if self.state.session == session && (session.is_some() || !self.state.loading) {
            return None;
        }

        self.latest_seq += 1;
        match session {
            None => {
                self.state = AuthState {
                    session: None,
                    user: None,
                    profile: ProfileSlot::Unresolved,
                    loading: false,
                };
                None
            }
            Some(session) => {
                let user = session.user.clone();
                let user_id = user.id.clone();
                self.state.session = Some(session);
                self.state.user = Some(user);
                self.state.profile = ProfileSlot::Unresolved;
                // loading stays wherever it was: the initial resolution keeps
                // it up until the profile settles, later deliveries must not
                // flash the loading UI.
                Some(FetchTicket { seq: self.latest_seq, user_id })
            }
        }
    }

    /// Apply a finished profile fetch. A fetch error is reported as `None`
    /// and resolves to `Absent`; a missing profile is a valid state, not an
    /// error. Returns false when the ticket was superseded and the result
    /// was discarded.
    pub fn complete_profile(&mut self, ticket: &FetchTicket, profile: Option<Profile>) -> bool {
        if ticket.seq != self.latest_seq {
            return false;
        }
        self.state.profile = match profile {
            Some(profile) => ProfileSlot::Present(profile),
            None => ProfileSlot::Absent,
        };
        self.state.loading = false;
        true
    }

    /// Start a re-fetch of the current user's profile (after an out-of-band
    /// mutation such as a role change). No-op when no user is known.
    ///
    /// The existing profile stays visible until the new result lands; only
    /// the completion swaps it.
    pub fn refresh_ticket(&mut self) -> Option<FetchTicket> {
        let user = self.state.user.as_ref()?;
        let user_id = user.id.clone();
        self.latest_seq += 1;
        Some(FetchTicket { seq: self.latest_seq, user_id })
    }

    /// Enter the brief sign-out loading sub-state. Bumps the sequence so an
    /// in-flight profile fetch for the outgoing user cannot resurrect state.
    pub fn begin_sign_out(&mut self) {
        self.latest_seq += 1;
        self.state.loading = true;
    }

    /// Clear all local state after the remote sign-out call returned
    /// (whatever its outcome; sign-out is best effort from the UI's view).
    pub fn finish_sign_out(&mut self) {
        self.latest_seq += 1;
        self.state = AuthState {
            session: None,
            user: None,
            profile: ProfileSlot::Unresolved,
            loading: false,
        };
    }
}
