//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the REST API and Leptos SSR rendering under a single
//! Axum router. All page routes are owned by the Leptos app; the API lives
//! under `/api` plus the two top-level OAuth endpoints.

pub mod admin;
pub mod applications;
pub mod auth;
pub mod events;
pub mod profiles;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::state::AppState;

/// REST API routes consumed by the hydrated client.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/auth/google", get(auth::google_redirect))
        .route("/auth/google/callback", get(auth::google_callback))
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/session", get(auth::current_session))
        .route("/api/profiles/{user_id}", get(profiles::get_profile))
        .route(
            "/api/profiles/me",
            post(profiles::create_my_profile).patch(profiles::update_my_profile),
        )
        .route("/api/events", get(events::list_events).post(events::create_event))
        .route("/api/events/mine", get(events::my_events))
        .route(
            "/api/events/{id}",
            get(events::get_event)
                .patch(events::update_event)
                .delete(events::delete_event),
        )
        .route("/api/events/{id}/apply", post(applications::apply))
        .route("/api/events/{id}/applications", get(applications::list_applicants))
        .route("/api/applications/mine", get(applications::my_applications))
        .route("/api/applications/{id}", patch(applications::update_application))
        .route("/api/admin/users", get(admin::list_users))
        .route("/api/admin/users/{id}/role", patch(admin::set_role))
        .route("/api/admin/users/{id}/deleted", patch(admin::set_deleted))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full app router: REST API + Leptos SSR pages + static assets at `/pkg`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_helpers::test_app_state;

    #[tokio::test]
    async fn healthz_returns_ok() {
        assert_eq!(healthz().await, StatusCode::OK);
    }

    #[tokio::test]
    async fn api_routes_builds_without_panicking() {
        let _router = api_routes(test_app_state());
    }
}
