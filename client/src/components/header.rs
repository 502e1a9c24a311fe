//! Top navigation bar.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::provider::use_auth;

/// Site-wide header. Links adapt to the signed-in user's role; the profile
/// may still be resolving, in which case only the generic links show.
#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state();
    let navigate = use_navigate();

    let role = move || state.get().profile.profile().map(|p| p.role);
    let signed_in = move || state.get().user.is_some();

    let on_sign_out = move |_| {
        auth.sign_out();
        navigate("/", NavigateOptions::default());
    };

    view! {
        <header class="site-header">
            <A href="/" attr:class="site-header__brand">"Volunteerly"</A>
            <nav class="site-header__nav">
                <A href="/events">"Events"</A>
                <Show when=move || role() == Some(Role::Organization)>
                    <A href="/org-dashboard">"Dashboard"</A>
                    <A href="/create-event">"Create Event"</A>
                </Show>
                <Show when=move || role() == Some(Role::Admin)>
                    <A href="/admin">"Admin"</A>
                </Show>
                <Show
                    when=signed_in
                    fallback=|| {
                        view! {
                            <A href="/login">"Log In"</A>
                            <A href="/signup" attr:class="site-header__cta">"Sign Up"</A>
                        }
                    }
                >
                    <A href="/profile">"Profile"</A>
                    <button class="site-header__signout" on:click=on_sign_out.clone()>
                        "Sign Out"
                    </button>
                </Show>
            </nav>
        </header>
    }
}
