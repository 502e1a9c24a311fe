//! Event summary card used on the home and events pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Event;
use crate::util::format::short_timestamp;

#[component]
pub fn EventCard(event: Event) -> impl IntoView {
    let href = format!("/event/{}", event.id);
    let when = short_timestamp(&event.event_date);

    view! {
        <A href=href attr:class="event-card">
            <Show when={
                let has_image = event.image_url.is_some();
                move || has_image
            }>
                <img
                    class="event-card__image"
                    src=event.image_url.clone().unwrap_or_default()
                    alt=""
                />
            </Show>
            <div class="event-card__body">
                <h3 class="event-card__title">{event.title.clone()}</h3>
                <p class="event-card__meta">{when.clone()} " · " {event.location.clone()}</p>
            </div>
        </A>
    }
}
