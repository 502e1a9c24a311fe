//! Volunteer application routes: apply, list applicants, approve/reject.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::routes::events::event_error_to_status;
use crate::routes::profiles::require_role;
use crate::services::application::{self, ApplicantRow, ApplicationError, ApplicationRow, ApplicationStatus};
use crate::services::profile::Role;
use crate::state::AppState;

pub(crate) fn application_error_to_status(err: &ApplicationError) -> StatusCode {
    match err {
        ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
        ApplicationError::AlreadyApplied(_) => StatusCode::CONFLICT,
        ApplicationError::InvalidStatus(_) => StatusCode::BAD_REQUEST,
        ApplicationError::Event(e) => event_error_to_status(e),
        ApplicationError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[derive(Deserialize, Default)]
pub struct ApplyBody {
    pub message: Option<String>,
}

/// `POST /api/events/{id}/apply` — apply as a volunteer. Volunteer role
/// required; organizers manage events, they do not staff them.
pub async fn apply(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(event_id): Path<Uuid>,
    body: Option<Json<ApplyBody>>,
) -> Result<Json<ApplicationRow>, StatusCode> {
    require_role(&state.pool, auth.user.id, Role::Volunteer).await?;

    let message = body.as_ref().and_then(|b| b.message.as_deref());
    let row = application::apply(&state.pool, event_id, auth.user.id, message)
        .await
        .map_err(|e| application_error_to_status(&e))?;
    Ok(Json(row))
}

/// `GET /api/events/{id}/applications` — applicants joined with profile
/// name/phone. Organizer of the event only.
pub async fn list_applicants(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(event_id): Path<Uuid>,
) -> Result<Json<Vec<ApplicantRow>>, StatusCode> {
    let rows = application::list_applicants(&state.pool, event_id, auth.user.id)
        .await
        .map_err(|e| application_error_to_status(&e))?;
    Ok(Json(rows))
}

/// `GET /api/applications/mine` — the calling volunteer's applications.
pub async fn my_applications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<ApplicationRow>>, StatusCode> {
    let rows = application::list_by_volunteer(&state.pool, auth.user.id)
        .await
        .map_err(|e| application_error_to_status(&e))?;
    Ok(Json(rows))
}

#[derive(Deserialize)]
pub struct UpdateApplicationBody {
    pub status: String,
}

/// `PATCH /api/applications/{id}` — approve or reject. Event organizer only;
/// setting an application back to pending is not a supported transition.
pub async fn update_application(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(application_id): Path<Uuid>,
    Json(body): Json<UpdateApplicationBody>,
) -> Result<Json<ApplicationRow>, StatusCode> {
    let Some(status) = ApplicationStatus::from_str(&body.status) else {
        return Err(StatusCode::BAD_REQUEST);
    };
    if status == ApplicationStatus::Pending {
        return Err(StatusCode::BAD_REQUEST);
    }

    let row = application::set_status(&state.pool, application_id, auth.user.id, status)
        .await
        .map_err(|e| application_error_to_status(&e))?;
    Ok(Json(row))
}

#[cfg(test)]
#[path = "applications_test.rs"]
mod tests;
