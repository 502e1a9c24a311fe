//! Route guard component.
//!
//! Wraps a page and admits, redirects, or holds a placeholder based on the
//! pure decision in `util::guard`. Redirects only fire once auth state has
//! resolved far enough to be sure; see the guard's doc for the table.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::provider::use_auth;
use crate::util::guard::{RouteDecision, decide};

/// Guarded wrapper for protected pages. Without `role`, any signed-in user
/// passes; with it, only a resolved profile bearing that role does.
#[component]
pub fn Protected(
    #[prop(optional, into)] role: Option<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth().state();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        match decide(&state, role) {
            RouteDecision::SignIn => navigate("/login", NavigateOptions::default()),
            RouteDecision::Unauthorized => navigate("/unauthorized", NavigateOptions::default()),
            RouteDecision::Wait | RouteDecision::Allow => {}
        }
    });

    move || {
        if decide(&auth.get(), role) == RouteDecision::Allow {
            children().into_any()
        } else {
            view! {
                <div class="page-loading">
                    <p>"Loading..."</p>
                </div>
            }
            .into_any()
        }
    }
}
