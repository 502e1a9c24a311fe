//! Admin dashboard: list every user, change roles, soft delete and restore.

use leptos::prelude::*;

use crate::components::protected_route::Protected;
use crate::net::types::{AdminUser, Role};

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <Protected role=Role::Admin>
            <AdminDashboard/>
        </Protected>
    }
}

#[component]
fn AdminDashboard() -> impl IntoView {
    let reload = RwSignal::new(0u32);
    let users = LocalResource::new(move || {
        reload.track();
        crate::net::api::fetch_admin_users()
    });
    let info = RwSignal::new(String::new());

    let on_role_change = move |user_id: String, role: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::set_user_role(&user_id, &role).await {
                Ok(_) => reload.update(|n| *n += 1),
                Err(e) => info.set(format!("Role change failed: {e}")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, role);
        }
    };

    let on_toggle_deleted = move |user_id: String, is_deleted: bool| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::set_user_deleted(&user_id, is_deleted).await {
                Ok(_) => reload.update(|n| *n += 1),
                Err(e) => info.set(format!("Update failed: {e}")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, is_deleted);
        }
    };

    view! {
        <div class="admin-dashboard">
            <h1>"User management"</h1>
            <Show when=move || !info.get().is_empty()>
                <p class="admin-dashboard__info">{move || info.get()}</p>
            </Show>
            <Suspense fallback=move || view! { <p>"Loading users..."</p> }>
                {move || {
                    users.get().map(|list| {
                        let list = list.unwrap_or_default();
                        view! {
                            <table class="admin-dashboard__table">
                                <thead>
                                    <tr>
                                        <th>"Name"</th>
                                        <th>"Email"</th>
                                        <th>"Role"</th>
                                        <th>"Status"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For each=move || list.clone() key=|user| user.id.clone() let:user>
                                        <AdminUserRow
                                            user=user
                                            on_role_change=on_role_change
                                            on_toggle_deleted=on_toggle_deleted
                                        />
                                    </For>
                                </tbody>
                            </table>
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn AdminUserRow(
    user: AdminUser,
    on_role_change: impl Fn(String, String) + Clone + 'static,
    on_toggle_deleted: impl Fn(String, bool) + Clone + 'static,
) -> impl IntoView {
    let id = user.id.clone();
    let is_deleted = user.is_deleted;

    view! {
        <tr class="admin-user-row" class:is-deleted=move || is_deleted>
            <td>{user.full_name.clone()}</td>
            <td>{user.email.clone().unwrap_or_default()}</td>
            <td>
                <select
                    prop:value=user.role.as_str()
                    on:change={
                        let on_role_change = on_role_change.clone();
                        let id = id.clone();
                        move |ev| on_role_change(id.clone(), event_target_value(&ev))
                    }
                >
                    <option value="volunteer">"Volunteer"</option>
                    <option value="organization">"Organization"</option>
                    <option value="admin">"Admin"</option>
                </select>
            </td>
            <td>{if is_deleted { "Deleted" } else { "Active" }}</td>
            <td>
                <button
                    class="btn"
                    on:click={
                        let on_toggle_deleted = on_toggle_deleted.clone();
                        let id = id.clone();
                        move |_| on_toggle_deleted(id.clone(), !is_deleted)
                    }
                >
                    {if is_deleted { "Restore" } else { "Delete" }}
                </button>
            </td>
        </tr>
    }
}
