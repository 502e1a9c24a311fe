//! Event detail page with the volunteer application form.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::net::types::Role;
use crate::state::provider::use_auth;
use crate::util::format::short_timestamp;

#[component]
pub fn EventDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let event_id = move || params.read().get("id").unwrap_or_default();

    let event = LocalResource::new(move || {
        let id = event_id();
        async move { crate::net::api::fetch_event(&id).await }
    });

    view! {
        <div class="event-details-page">
            <Suspense fallback=move || view! { <p>"Loading event..."</p> }>
                {move || {
                    event.get().map(|found| match found {
                        Some(event) => {
                            let when = short_timestamp(&event.event_date);
                            view! {
                                <article class="event-details">
                                    <Show when={
                                        let has_image = event.image_url.is_some();
                                        move || has_image
                                    }>
                                        <img
                                            class="event-details__image"
                                            src=event.image_url.clone().unwrap_or_default()
                                            alt=""
                                        />
                                    </Show>
                                    <h1>{event.title.clone()}</h1>
                                    <p class="event-details__meta">
                                        {when.clone()} " · " {event.location.clone()}
                                    </p>
                                    <p class="event-details__description">
                                        {event.description.clone().unwrap_or_default()}
                                    </p>
                                    <ApplySection event_id=event.id.clone()/>
                                </article>
                            }
                                .into_any()
                        }
                        None => view! { <p>"Event not found."</p> }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}

/// Application form, shown to signed-in volunteers only. Everyone else gets
/// a hint instead; organizers and admins do not apply.
#[component]
fn ApplySection(event_id: String) -> impl IntoView {
    let state = use_auth().state();
    let message = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let applied = RwSignal::new(false);

    let is_volunteer =
        move || state.get().profile.profile().map(|p| p.role) == Some(Role::Volunteer);
    let signed_out = move || {
        let state = state.get();
        !state.loading && state.user.is_none()
    };

    let event_id = StoredValue::new(event_id);
    let on_apply = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let event_id = event_id.get_value();
            let note = message.get().trim().to_owned();
            leptos::task::spawn_local(async move {
                let note_opt = (!note.is_empty()).then_some(note.as_str());
                match crate::net::api::apply_to_event(&event_id, note_opt).await {
                    Ok(_) => {
                        applied.set(true);
                        info.set("Application sent.".to_owned());
                    }
                    Err(e) => info.set(e),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &event_id;
        }
    };

    view! {
        <section class="apply-section">
            <Show when=is_volunteer>
                <Show
                    when=move || !applied.get()
                    fallback=|| view! { <p class="apply-section__done">"Application sent."</p> }
                >
                    <textarea
                        class="apply-section__message"
                        placeholder="Anything the organizer should know? (optional)"
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=on_apply.clone()
                    >
                        "Apply to Volunteer"
                    </button>
                </Show>
            </Show>
            <Show when=signed_out>
                <p class="apply-section__hint">
                    <A href="/login">"Log in"</A> " as a volunteer to apply."
                </p>
            </Show>
            <Show when=move || !info.get().is_empty()>
                <p class="apply-section__info">{move || info.get()}</p>
            </Show>
        </section>
    }
}
