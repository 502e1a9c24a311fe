//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Read helpers return `Option` so auth/profile fetch failures degrade UI
//! behavior without crashing hydration; mutations return `Result` with a
//! display-ready message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AdminUser, Applicant, Application, Event, Profile, Session};
#[cfg(feature = "hydrate")]
use serde_json::json;

#[cfg(any(test, feature = "hydrate"))]
fn profile_endpoint(user_id: &str) -> String {
    format!("/api/profiles/{user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn event_endpoint(event_id: &str) -> String {
    format!("/api/events/{event_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn apply_endpoint(event_id: &str) -> String {
    format!("/api/events/{event_id}/apply")
}

#[cfg(any(test, feature = "hydrate"))]
fn applicants_endpoint(event_id: &str) -> String {
    format!("/api/events/{event_id}/applications")
}

#[cfg(any(test, feature = "hydrate"))]
fn application_endpoint(application_id: &str) -> String {
    format!("/api/applications/{application_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn role_endpoint(user_id: &str) -> String {
    format!("/api/admin/users/{user_id}/role")
}

#[cfg(any(test, feature = "hydrate"))]
fn deleted_endpoint(user_id: &str) -> String {
    format!("/api/admin/users/{user_id}/deleted")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

// =============================================================
// auth
// =============================================================

/// Fetch the current session from `/api/auth/session`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_session() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/session")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Session>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign up with email, password, and display name. The server creates a
/// volunteer profile and sets the session cookie.
///
/// # Errors
///
/// Returns a display-ready message when the request fails or is rejected.
pub async fn signup(email: &str, password: &str, full_name: &str) -> Result<Session, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/signup")
            .json(&json!({"email": email, "password": password, "full_name": full_name}))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("signup", resp.status()));
        }
        resp.json::<Session>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, full_name);
        Err("not available on server".to_owned())
    }
}

/// Log in with email and password. The server sets the session cookie.
///
/// # Errors
///
/// Returns a display-ready message when the credentials are rejected.
pub async fn login(email: &str, password: &str) -> Result<Session, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&json!({"email": email, "password": password}))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("login", resp.status()));
        }
        resp.json::<Session>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Log out via `POST /api/auth/logout`. Best effort; the caller clears local
/// state regardless of the outcome, so a failure is only logged.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await
        {
            log::warn!("remote logout failed: {e}");
        }
    }
}

// =============================================================
// profiles
// =============================================================

/// Fetch a profile by user id. Returns `None` when the account has no
/// profile row (404) or on any fetch failure.
pub async fn fetch_profile(user_id: &str) -> Option<Profile> {
    #[cfg(feature = "hydrate")]
    {
        let url = profile_endpoint(user_id);
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Profile>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        None
    }
}

/// Create the signed-in user's profile row.
///
/// # Errors
///
/// Returns a display-ready message when the request fails or is rejected.
pub async fn create_my_profile(
    full_name: &str,
    role: &str,
    phone: Option<&str>,
) -> Result<Profile, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/profiles/me")
            .json(&json!({"full_name": full_name, "role": role, "phone": phone}))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("profile create", resp.status()));
        }
        resp.json::<Profile>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (full_name, role, phone);
        Err("not available on server".to_owned())
    }
}

/// Update the signed-in user's profile fields. Omitted fields are kept.
///
/// # Errors
///
/// Returns a display-ready message when the request fails or is rejected.
pub async fn update_my_profile(
    full_name: Option<&str>,
    phone: Option<&str>,
    avatar_url: Option<&str>,
) -> Result<Profile, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::patch("/api/profiles/me")
            .json(&json!({
                "full_name": full_name,
                "phone": phone,
                "avatar_url": avatar_url,
            }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("profile update", resp.status()));
        }
        resp.json::<Profile>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (full_name, phone, avatar_url);
        Err("not available on server".to_owned())
    }
}

// =============================================================
// events
// =============================================================

/// Fetch all events, soonest first. Returns `None` on any failure.
pub async fn fetch_events() -> Option<Vec<Event>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/events").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Event>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch one event by id.
pub async fn fetch_event(event_id: &str) -> Option<Event> {
    #[cfg(feature = "hydrate")]
    {
        let url = event_endpoint(event_id);
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Event>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = event_id;
        None
    }
}

/// Fetch the signed-in organizer's own events, newest first.
pub async fn fetch_my_events() -> Option<Vec<Event>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/events/mine")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Event>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Event fields sent on create and update.
#[derive(Clone, Debug)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub event_date: String,
    pub image_url: String,
}

#[cfg(feature = "hydrate")]
impl EventDraft {
    fn to_body(&self) -> serde_json::Value {
        json!({
            "title": self.title,
            "description": self.description,
            "location": self.location,
            "event_date": self.event_date,
            "image_url": if self.image_url.trim().is_empty() { None } else { Some(self.image_url.as_str()) },
        })
    }
}

/// Create an event (organizers only).
///
/// # Errors
///
/// Returns a display-ready message when the request fails or is rejected.
pub async fn create_event(draft: &EventDraft) -> Result<Event, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/events")
            .json(&draft.to_body())
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("event create", resp.status()));
        }
        resp.json::<Event>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err("not available on server".to_owned())
    }
}

/// Update an event owned by the signed-in organizer.
///
/// # Errors
///
/// Returns a display-ready message when the request fails or is rejected.
pub async fn update_event(event_id: &str, draft: &EventDraft) -> Result<Event, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = event_endpoint(event_id);
        let resp = gloo_net::http::Request::patch(&url)
            .json(&draft.to_body())
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("event update", resp.status()));
        }
        resp.json::<Event>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (event_id, draft);
        Err("not available on server".to_owned())
    }
}

/// Delete an event owned by the signed-in organizer.
///
/// # Errors
///
/// Returns a display-ready message when the request fails or is rejected.
pub async fn delete_event(event_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = event_endpoint(event_id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("event delete", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = event_id;
        Err("not available on server".to_owned())
    }
}

// =============================================================
// applications
// =============================================================

/// Apply to an event as the signed-in volunteer.
///
/// # Errors
///
/// Returns a display-ready message; a 409 means the volunteer already
/// applied.
pub async fn apply_to_event(event_id: &str, message: Option<&str>) -> Result<Application, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = apply_endpoint(event_id);
        let resp = gloo_net::http::Request::post(&url)
            .json(&json!({"message": message}))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status() == 409 {
            return Err("You have already applied to this event.".to_owned());
        }
        if !resp.ok() {
            return Err(request_failed_message("application", resp.status()));
        }
        resp.json::<Application>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (event_id, message);
        Err("not available on server".to_owned())
    }
}

/// Fetch applicants for one of the signed-in organizer's events.
pub async fn fetch_applicants(event_id: &str) -> Option<Vec<Applicant>> {
    #[cfg(feature = "hydrate")]
    {
        let url = applicants_endpoint(event_id);
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Applicant>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = event_id;
        None
    }
}

/// Fetch the signed-in volunteer's own applications, newest first.
pub async fn fetch_my_applications() -> Option<Vec<Application>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/applications/mine")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Application>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Approve or reject an application on one of the organizer's events.
///
/// # Errors
///
/// Returns a display-ready message when the request fails or is rejected.
pub async fn set_application_status(
    application_id: &str,
    status: &str,
) -> Result<Application, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = application_endpoint(application_id);
        let resp = gloo_net::http::Request::patch(&url)
            .json(&json!({"status": status}))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("status update", resp.status()));
        }
        resp.json::<Application>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (application_id, status);
        Err("not available on server".to_owned())
    }
}

// =============================================================
// admin
// =============================================================

/// Fetch every profile joined with its auth email (admins only).
pub async fn fetch_admin_users() -> Option<Vec<AdminUser>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/admin/users")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<AdminUser>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Change a user's role (admins only).
///
/// # Errors
///
/// Returns a display-ready message when the request fails or is rejected.
pub async fn set_user_role(user_id: &str, role: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = role_endpoint(user_id);
        let resp = gloo_net::http::Request::patch(&url)
            .json(&json!({"role": role}))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("role update", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, role);
        Err("not available on server".to_owned())
    }
}

/// Soft delete or restore a user (admins only).
///
/// # Errors
///
/// Returns a display-ready message when the request fails or is rejected.
pub async fn set_user_deleted(user_id: &str, is_deleted: bool) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = deleted_endpoint(user_id);
        let resp = gloo_net::http::Request::patch(&url)
            .json(&json!({"is_deleted": is_deleted}))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("delete update", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, is_deleted);
        Err("not available on server".to_owned())
    }
}
