//! Landing page with a hero section and the next few events.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::event_card::EventCard;

const FEATURED_COUNT: usize = 6;

#[component]
pub fn HomePage() -> impl IntoView {
    let events = LocalResource::new(|| crate::net::api::fetch_events());

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Lend a hand where it matters."</h1>
                <p>"Find local volunteer events, or post your own and meet the people ready to help."</p>
                <div class="home-page__hero-actions">
                    <A href="/events" attr:class="btn btn--primary">"Browse Events"</A>
                    <A href="/register-org" attr:class="btn">"Register as Organization"</A>
                </div>
            </section>

            <section class="home-page__featured">
                <h2>"Upcoming events"</h2>
                <Suspense fallback=move || view! { <p>"Loading events..."</p> }>
                    {move || {
                        events.get().map(|list| {
                            let list = list.unwrap_or_default();
                            if list.is_empty() {
                                view! { <p class="home-page__empty">"No events yet. Check back soon."</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="home-page__grid">
                                        {list
                                            .into_iter()
                                            .take(FEATURED_COUNT)
                                            .map(|event| view! { <EventCard event=event/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
