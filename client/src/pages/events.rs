//! Public event listing, soonest first.

use leptos::prelude::*;

use crate::components::event_card::EventCard;

#[component]
pub fn EventsPage() -> impl IntoView {
    let events = LocalResource::new(|| crate::net::api::fetch_events());

    view! {
        <div class="events-page">
            <h1>"Volunteer Events"</h1>
            <Suspense fallback=move || view! { <p>"Loading events..."</p> }>
                {move || {
                    events.get().map(|list| {
                        let list = list.unwrap_or_default();
                        if list.is_empty() {
                            view! { <p class="events-page__empty">"No events have been posted yet."</p> }
                                .into_any()
                        } else {
                            view! {
                                <div class="events-page__grid">
                                    {list
                                        .into_iter()
                                        .map(|event| view! { <EventCard event=event/> })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
