//! Site footer.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>"Volunteerly"</p>
            <nav class="site-footer__nav">
                <A href="/events">"Events"</A>
                <A href="/register-org">"For organizations"</A>
            </nav>
        </footer>
    }
}
