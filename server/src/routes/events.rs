//! Event routes: public browsing plus organizer-only management.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::routes::profiles::require_role;
use crate::services::event::{self, EventError, EventRow, NewEvent};
use crate::services::profile::Role;
use crate::state::AppState;

pub(crate) fn event_error_to_status(err: &EventError) -> StatusCode {
    match err {
        EventError::NotFound(_) => StatusCode::NOT_FOUND,
        EventError::Forbidden(_) => StatusCode::FORBIDDEN,
        EventError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `GET /api/events` — all events ordered by date. Public.
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<EventRow>>, StatusCode> {
    let events = event::list_events(&state.pool)
        .await
        .map_err(|e| event_error_to_status(&e))?;
    Ok(Json(events))
}

/// `GET /api/events/{id}` — one event. Public.
pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<EventRow>, StatusCode> {
    let event = event::get_event(&state.pool, event_id)
        .await
        .map_err(|e| event_error_to_status(&e))?;
    Ok(Json(event))
}

/// `GET /api/events/mine` — the calling organizer's events, newest first.
pub async fn my_events(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Vec<EventRow>>, StatusCode> {
    require_role(&state.pool, auth.user.id, Role::Organization).await?;
    let events = event::list_by_organizer(&state.pool, auth.user.id)
        .await
        .map_err(|e| event_error_to_status(&e))?;
    Ok(Json(events))
}

#[derive(Deserialize)]
pub struct EventBody {
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    pub event_date: String,
    pub image_url: Option<String>,
}

fn validate_event_body(body: &EventBody) -> Result<(), StatusCode> {
    if body.title.trim().is_empty() || body.location.trim().is_empty() || body.event_date.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    Ok(())
}

/// `POST /api/events` — create an event. Organization role required.
pub async fn create_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<EventBody>,
) -> Result<Json<EventRow>, StatusCode> {
    require_role(&state.pool, auth.user.id, Role::Organization).await?;
    validate_event_body(&body)?;

    let event = event::create_event(
        &state.pool,
        auth.user.id,
        NewEvent {
            title: &body.title,
            description: body.description.as_deref(),
            location: &body.location,
            event_date: &body.event_date,
            image_url: body.image_url.as_deref(),
        },
    )
    .await
    .map_err(|e| event_error_to_status(&e))?;
    Ok(Json(event))
}

/// `PATCH /api/events/{id}` — update an event; organizer only.
pub async fn update_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(event_id): Path<Uuid>,
    Json(body): Json<EventBody>,
) -> Result<Json<EventRow>, StatusCode> {
    validate_event_body(&body)?;

    let event = event::update_event(
        &state.pool,
        event_id,
        auth.user.id,
        NewEvent {
            title: &body.title,
            description: body.description.as_deref(),
            location: &body.location,
            event_date: &body.event_date,
            image_url: body.image_url.as_deref(),
        },
    )
    .await
    .map_err(|e| event_error_to_status(&e))?;
    Ok(Json(event))
}

/// `DELETE /api/events/{id}` — delete an event; organizer only.
pub async fn delete_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(event_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    event::delete_event(&state.pool, event_id, auth.user.id)
        .await
        .map_err(|e| event_error_to_status(&e))?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

#[cfg(test)]
#[path = "events_test.rs"]
mod tests;
