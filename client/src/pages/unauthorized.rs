//! Shown when a signed-in user lands on a route their role cannot access.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="unauthorized-page">
            <h1>"Not allowed"</h1>
            <p>"Your account does not have access to that page."</p>
            <A href="/" attr:class="btn btn--primary">"Back to home"</A>
        </div>
    }
}
