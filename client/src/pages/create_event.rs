//! Event creation form for organizations.

#[cfg(test)]
#[path = "create_event_test.rs"]
mod create_event_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::protected_route::Protected;
use crate::net::api::EventDraft;
use crate::net::types::Role;

fn validate_event_draft(
    title: &str,
    description: &str,
    location: &str,
    event_date: &str,
    image_url: &str,
) -> Result<EventDraft, &'static str> {
    let title = title.trim();
    let location = location.trim();
    let event_date = event_date.trim();
    if title.is_empty() || location.is_empty() || event_date.is_empty() {
        return Err("Title, location, and date are required.");
    }
    Ok(EventDraft {
        title: title.to_owned(),
        description: description.trim().to_owned(),
        location: location.to_owned(),
        event_date: event_date.to_owned(),
        image_url: image_url.trim().to_owned(),
    })
}

#[component]
pub fn CreateEventPage() -> impl IntoView {
    view! {
        <Protected role=Role::Organization>
            <CreateEventForm/>
        </Protected>
    }
}

#[component]
fn CreateEventForm() -> impl IntoView {
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let event_date = RwSignal::new(String::new());
    let image_url = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let draft = match validate_event_draft(
            &title.get(),
            &description.get(),
            &location.get(),
            &event_date.get(),
            &image_url.get(),
        ) {
            Ok(draft) => draft,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Publishing...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_event(&draft).await {
                    Ok(_) => navigate("/org-dashboard", NavigateOptions::default()),
                    Err(e) => {
                        info.set(format!("Could not create event: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = draft;
        }
    };

    view! {
        <div class="event-form-page">
            <h1>"Create an event"</h1>
            <form class="event-form" on:submit=on_submit>
                <input
                    class="event-form__input"
                    type="text"
                    placeholder="Event title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <textarea
                    class="event-form__input"
                    placeholder="What will volunteers be doing?"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <input
                    class="event-form__input"
                    type="text"
                    placeholder="Location"
                    prop:value=move || location.get()
                    on:input=move |ev| location.set(event_target_value(&ev))
                />
                <input
                    class="event-form__input"
                    type="datetime-local"
                    prop:value=move || event_date.get()
                    on:input=move |ev| event_date.set(event_target_value(&ev))
                />
                <input
                    class="event-form__input"
                    type="url"
                    placeholder="Image URL (optional)"
                    prop:value=move || image_url.get()
                    on:input=move |ev| image_url.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Publish Event"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="event-form__message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
