//! Reactive wiring for the auth state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provide_auth` is called once at the app root. It owns the
//! `SessionStore`, keeps a standing subscription on the session channel,
//! kicks off the initial session fetch, and mirrors every store change into
//! an `RwSignal` that pages and guards read. Pages reach it all through
//! `use_auth`.

use std::sync::{Arc, Mutex};

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::Session;
use crate::state::auth::{AuthState, FetchTicket, SessionStore};
use crate::state::channel::AuthChannel;

/// Shared handle to the auth machinery. Cheap to clone.
#[derive(Clone)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
    store: Arc<Mutex<SessionStore>>,
    channel: AuthChannel,
}

impl AuthContext {
    fn new() -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
            store: Arc::new(Mutex::new(SessionStore::new())),
            channel: AuthChannel::new(),
        }
    }

    /// Reactive snapshot read by guards and pages.
    #[must_use]
    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    #[must_use]
    pub fn channel(&self) -> &AuthChannel {
        &self.channel
    }

    /// Broadcast a session change (login result, logout, OAuth return).
    /// Every subscriber sees it; the provider's own subscription routes it
    /// into the store.
    pub fn publish(&self, session: Option<Session>) {
        self.channel.publish(session.as_ref());
    }

    /// Re-fetch the current user's profile, e.g. after creating the profile
    /// row through organization registration.
    pub fn refresh_profile(&self) {
        let ticket = match self.store.lock() {
            Ok(mut store) => store.refresh_ticket(),
            Err(_) => None,
        };
        if let Some(ticket) = ticket {
            self.spawn_profile_fetch(ticket);
        }
    }

    /// Sign out: call the server, then clear local state whatever the
    /// remote outcome. An in-flight profile fetch for the outgoing user is
    /// invalidated up front.
    pub fn sign_out(&self) {
        if let Ok(mut store) = self.store.lock() {
            store.begin_sign_out();
        }
        self.sync();

        #[cfg(feature = "hydrate")]
        {
            let ctx = self.clone();
            leptos::task::spawn_local(async move {
                api::logout().await;
                if let Ok(mut store) = ctx.store.lock() {
                    store.finish_sign_out();
                }
                ctx.sync();
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            if let Ok(mut store) = self.store.lock() {
                store.finish_sign_out();
            }
            self.sync();
        }
    }

    /// Route one channel delivery into the store and start the profile
    /// fetch it asks for.
    fn apply_delivery(&self, session: Option<Session>) {
        let ticket = match self.store.lock() {
            Ok(mut store) => store.deliver(session),
            Err(_) => return,
        };
        self.sync();
        if let Some(ticket) = ticket {
            self.spawn_profile_fetch(ticket);
        }
    }

    fn spawn_profile_fetch(&self, ticket: FetchTicket) {
        #[cfg(feature = "hydrate")]
        {
            let ctx = self.clone();
            leptos::task::spawn_local(async move {
                let profile = api::fetch_profile(&ticket.user_id).await;
                if let Ok(mut store) = ctx.store.lock() {
                    store.complete_profile(&ticket, profile);
                }
                ctx.sync();
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            // No network on the server; resolve to absent so SSR output
            // settles instead of hanging in loading.
            if let Ok(mut store) = self.store.lock() {
                store.complete_profile(&ticket, None);
            }
            self.sync();
        }
    }

    /// Mirror the store snapshot into the reactive signal.
    fn sync(&self) {
        if let Ok(store) = self.store.lock() {
            self.state.set(store.snapshot().clone());
        }
    }
}

/// Install the auth context at the app root and start the initial session
/// resolution. Returns the context for immediate use.
pub fn provide_auth() -> AuthContext {
    let ctx = AuthContext::new();
    provide_context(ctx.clone());

    // Standing subscription that feeds channel deliveries into the store.
    // Released when the provider's scope is cleaned up.
    let routing = {
        let ctx = ctx.clone();
        ctx.channel.clone().subscribe(move |session| {
            ctx.apply_delivery(session.cloned());
        })
    };
    on_cleanup(move || drop(routing));

    #[cfg(feature = "hydrate")]
    {
        let ctx = ctx.clone();
        leptos::task::spawn_local(async move {
            let session = api::fetch_session().await;
            ctx.publish(session);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        // SSR renders the signed-out shell; the browser re-resolves on
        // hydration.
        ctx.publish(None);
    }

    ctx
}

/// Fetch the auth context installed by `provide_auth`. Panics when called
/// outside the provider's scope; that is a programming error, not a runtime
/// condition.
#[must_use]
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
