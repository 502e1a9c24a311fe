//! Profile page: view and edit the signed-in user's profile, or create one
//! for accounts that arrived without a profile row (Google sign-ins).

use leptos::prelude::*;

use crate::components::protected_route::Protected;
use crate::net::types::Profile;
use crate::state::auth::ProfileSlot;
use crate::state::provider::use_auth;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <Protected>
            <ProfileView/>
        </Protected>
    }
}

#[component]
fn ProfileView() -> impl IntoView {
    let state = use_auth().state();

    move || match state.get().profile {
        ProfileSlot::Present(profile) => view! { <EditProfileForm profile=profile/> }.into_any(),
        ProfileSlot::Absent => view! { <CreateProfileForm/> }.into_any(),
        ProfileSlot::Unresolved => {
            view! { <div class="page-loading"><p>"Loading..."</p></div> }.into_any()
        }
    }
}

/// Shown to accounts with no profile row yet. Creates a volunteer profile;
/// organizations register through their own flow.
#[component]
fn CreateProfileForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let auth = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let name_value = name.get().trim().to_owned();
        if name_value.is_empty() {
            info.set("Enter your name.".to_owned());
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_my_profile(&name_value, "volunteer", None).await {
                    Ok(_) => auth.refresh_profile(),
                    Err(e) => {
                        info.set(format!("Could not create profile: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name_value;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Finish setting up"</h1>
                <p>"Tell us your name to start volunteering."</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Create Profile"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn EditProfileForm(profile: Profile) -> impl IntoView {
    let name = RwSignal::new(profile.full_name.clone());
    let phone = RwSignal::new(profile.phone.clone().unwrap_or_default());
    let avatar_url = RwSignal::new(profile.avatar_url.clone().unwrap_or_default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let auth = use_auth();

    let role_label = profile.role.as_str().to_owned();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let name_value = name.get().trim().to_owned();
        if name_value.is_empty() {
            info.set("Name cannot be blank.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Saving...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            let phone_value = phone.get().trim().to_owned();
            let avatar_value = avatar_url.get().trim().to_owned();
            leptos::task::spawn_local(async move {
                let phone_opt = (!phone_value.is_empty()).then_some(phone_value.as_str());
                let avatar_opt = (!avatar_value.is_empty()).then_some(avatar_value.as_str());
                match crate::net::api::update_my_profile(Some(&name_value), phone_opt, avatar_opt)
                    .await
                {
                    Ok(_) => {
                        auth.refresh_profile();
                        info.set("Saved.".to_owned());
                    }
                    Err(e) => info.set(format!("Save failed: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name_value;
        }
    };

    view! {
        <div class="profile-page">
            <h1>"Your profile"</h1>
            <p class="profile-page__role">"Role: " {role_label}</p>
            <form class="auth-form" on:submit=on_submit>
                <input
                    class="auth-input"
                    type="text"
                    placeholder="Full name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="tel"
                    placeholder="Phone"
                    prop:value=move || phone.get()
                    on:input=move |ev| phone.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="url"
                    placeholder="Avatar URL"
                    prop:value=move || avatar_url.get()
                    on:input=move |ev| avatar_url.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Save"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="auth-message">{move || info.get()}</p>
            </Show>
            <MyApplications/>
        </div>
    }
}

/// The volunteer's own applications, newest first.
#[component]
fn MyApplications() -> impl IntoView {
    let applications = LocalResource::new(|| crate::net::api::fetch_my_applications());

    view! {
        <section class="profile-page__applications">
            <h2>"Your applications"</h2>
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    applications.get().map(|list| {
                        let list = list.unwrap_or_default();
                        if list.is_empty() {
                            view! { <p>"No applications yet."</p> }.into_any()
                        } else {
                            view! {
                                <ul>
                                    {list
                                        .into_iter()
                                        .map(|application| {
                                            let href = format!("/event/{}", application.event_id);
                                            view! {
                                                <li class="profile-page__application">
                                                    <a href=href>"View event"</a>
                                                    <span class="profile-page__application-status">
                                                        {application.status.label()}
                                                    </span>
                                                </li>
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
        </section>
    }
}
