//! Organization registration. Creates the signed-in account's profile row
//! with the organization role, then refreshes the cached profile so the
//! route guard sees the new role without a reload.

#[cfg(test)]
#[path = "register_org_test.rs"]
mod register_org_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::protected_route::Protected;
#[cfg(feature = "hydrate")]
use crate::state::provider::use_auth;

fn validate_org_name(name: &str) -> Result<String, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter your organization's name.");
    }
    Ok(name.to_owned())
}

#[component]
pub fn RegisterOrgPage() -> impl IntoView {
    view! {
        <Protected>
            <RegisterOrgForm/>
        </Protected>
    }
}

#[component]
fn RegisterOrgForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let auth = use_auth();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let org_name = match validate_org_name(&name.get()) {
            Ok(value) => value,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Registering...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            let navigate = navigate.clone();
            let phone_value = phone.get().trim().to_owned();
            leptos::task::spawn_local(async move {
                let phone_opt = (!phone_value.is_empty()).then_some(phone_value.as_str());
                match crate::net::api::create_my_profile(&org_name, "organization", phone_opt)
                    .await
                {
                    Ok(_) => {
                        auth.refresh_profile();
                        navigate("/org-dashboard", NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(format!("Registration failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = org_name;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Register your organization"</h1>
                <p>"Post events and manage volunteer applications."</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Organization name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="tel"
                        placeholder="Contact phone (optional)"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
