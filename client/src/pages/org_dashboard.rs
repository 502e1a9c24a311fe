//! Organization dashboard: own events, applicant review, event removal.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::protected_route::Protected;
use crate::net::types::{Applicant, ApplicationStatus, Event, Role};
use crate::util::format::short_timestamp;

#[component]
pub fn OrgDashboardPage() -> impl IntoView {
    view! {
        <Protected role=Role::Organization>
            <OrgDashboard/>
        </Protected>
    }
}

#[component]
fn OrgDashboard() -> impl IntoView {
    let reload = RwSignal::new(0u32);
    let events = LocalResource::new(move || {
        reload.track();
        crate::net::api::fetch_my_events()
    });

    // Applicants for the currently expanded event.
    let selected = RwSignal::new(None::<String>);
    let applicants = RwSignal::new(Vec::<Applicant>::new());

    let load_applicants = move |event_id: String| {
        selected.set(Some(event_id.clone()));
        applicants.set(Vec::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(list) = crate::net::api::fetch_applicants(&event_id).await {
                applicants.set(list);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = event_id;
        }
    };

    let on_delete = move |event_id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if crate::net::api::delete_event(&event_id).await.is_ok() {
                selected.set(None);
                reload.update(|n| *n += 1);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = event_id;
        }
    };

    let set_status = move |application_id: String, status: ApplicationStatus| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Ok(updated) =
                crate::net::api::set_application_status(&application_id, status.as_wire()).await
            {
                applicants.update(|list| {
                    if let Some(row) = list.iter_mut().find(|a| a.id == updated.id) {
                        row.status = updated.status;
                    }
                });
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (application_id, status);
        }
    };

    view! {
        <div class="org-dashboard">
            <header class="org-dashboard__header">
                <h1>"Your events"</h1>
                <A href="/create-event" attr:class="btn btn--primary">"+ New Event"</A>
            </header>

            <Suspense fallback=move || view! { <p>"Loading your events..."</p> }>
                {move || {
                    events.get().map(|list| {
                        let list = list.unwrap_or_default();
                        if list.is_empty() {
                            view! { <p>"You have not posted any events yet."</p> }.into_any()
                        } else {
                            view! {
                                <ul class="org-dashboard__events">
                                    {list
                                        .into_iter()
                                        .map(|event| {
                                            view! {
                                                <OrgEventRow
                                                    event=event
                                                    selected=selected
                                                    on_select=load_applicants
                                                    on_delete=on_delete
                                                />
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                                .into_any()
                        }
                    })
                }}
            </Suspense>

            <Show when=move || selected.get().is_some()>
                <section class="org-dashboard__applicants">
                    <h2>"Applicants"</h2>
                    <Show
                        when=move || !applicants.get().is_empty()
                        fallback=|| view! { <p>"No applications yet."</p> }
                    >
                        <ul>
                            <For
                                each=move || applicants.get()
                                key=|applicant| applicant.id.clone()
                                let:applicant
                            >
                                <ApplicantRow applicant=applicant set_status=set_status/>
                            </For>
                        </ul>
                    </Show>
                </section>
            </Show>
        </div>
    }
}

#[component]
fn OrgEventRow(
    event: Event,
    selected: RwSignal<Option<String>>,
    on_select: impl Fn(String) + Clone + 'static,
    on_delete: impl Fn(String) + Clone + 'static,
) -> impl IntoView {
    let id = event.id.clone();
    let is_open = {
        let id = id.clone();
        move || selected.get().as_deref() == Some(id.as_str())
    };
    let when = short_timestamp(&event.event_date);

    view! {
        <li class="org-dashboard__event" class:is-open=is_open>
            <div class="org-dashboard__event-main">
                <h3>{event.title.clone()}</h3>
                <p>{when} " · " {event.location.clone()}</p>
            </div>
            <div class="org-dashboard__event-actions">
                <button
                    class="btn"
                    on:click={
                        let on_select = on_select.clone();
                        let id = id.clone();
                        move |_| on_select(id.clone())
                    }
                >
                    "Applicants"
                </button>
                <button
                    class="btn btn--danger"
                    on:click={
                        let on_delete = on_delete.clone();
                        let id = id.clone();
                        move |_| on_delete(id.clone())
                    }
                >
                    "Delete"
                </button>
            </div>
        </li>
    }
}

#[component]
fn ApplicantRow(
    applicant: Applicant,
    set_status: impl Fn(String, ApplicationStatus) + Clone + 'static,
) -> impl IntoView {
    let id = applicant.id.clone();
    let name = applicant.full_name.clone().unwrap_or_else(|| "Unknown volunteer".to_owned());

    view! {
        <li class="applicant-row">
            <div class="applicant-row__who">
                <strong>{name}</strong>
                <Show when={
                    let has_message = applicant.message.is_some();
                    move || has_message
                }>
                    <p class="applicant-row__message">
                        {applicant.message.clone().unwrap_or_default()}
                    </p>
                </Show>
            </div>
            <span class="applicant-row__status">{applicant.status.label()}</span>
            <div class="applicant-row__actions">
                <button
                    class="btn btn--approve"
                    on:click={
                        let set_status = set_status.clone();
                        let id = id.clone();
                        move |_| set_status(id.clone(), ApplicationStatus::Approved)
                    }
                >
                    "Approve"
                </button>
                <button
                    class="btn btn--reject"
                    on:click={
                        let set_status = set_status.clone();
                        let id = id.clone();
                        move |_| set_status(id.clone(), ApplicationStatus::Rejected)
                    }
                >
                    "Reject"
                </button>
            </div>
        </li>
    }
}
