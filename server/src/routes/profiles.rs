//! Profile routes: fetch-by-id, self-provisioning, self-update.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::services::profile::{self, ProfileError, ProfileRow, Role};
use crate::state::AppState;

pub(crate) fn profile_error_to_status(err: &ProfileError) -> StatusCode {
    match err {
        ProfileError::NotFound(_) => StatusCode::NOT_FOUND,
        ProfileError::AlreadyExists(_) => StatusCode::CONFLICT,
        ProfileError::InvalidRole(_) => StatusCode::BAD_REQUEST,
        ProfileError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Load the caller's profile and require a specific role on it.
/// 403 both when the profile is missing and when the role mismatches: an
/// absent profile carries no authority.
pub(crate) async fn require_role(pool: &PgPool, user_id: Uuid, role: Role) -> Result<ProfileRow, StatusCode> {
    let profile = profile::get_profile(pool, user_id)
        .await
        .map_err(|e| profile_error_to_status(&e))?
        .ok_or(StatusCode::FORBIDDEN)?;
    if profile.role != role || profile.is_deleted {
        return Err(StatusCode::FORBIDDEN);
    }
    Ok(profile)
}

/// `GET /api/profiles/{user_id}` — fetch one profile row. 404 when the row
/// does not exist yet; clients treat that as a valid "absent" state.
pub async fn get_profile(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ProfileRow>, StatusCode> {
    let profile = profile::get_profile(&state.pool, user_id)
        .await
        .map_err(|e| profile_error_to_status(&e))?
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(profile))
}

#[derive(Deserialize)]
pub struct CreateProfileBody {
    pub full_name: String,
    pub role: String,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
}

/// `POST /api/profiles/me` — provision the caller's own profile. Used by the
/// organization registration flow for accounts that signed in via OAuth and
/// have no profile row yet. Self-assigning the admin role is rejected.
pub async fn create_my_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateProfileBody>,
) -> Result<Json<ProfileRow>, StatusCode> {
    let Some(role) = Role::from_str(&body.role) else {
        return Err(StatusCode::BAD_REQUEST);
    };
    if role == Role::Admin {
        return Err(StatusCode::FORBIDDEN);
    }
    if body.full_name.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let profile = profile::create_profile(
        &state.pool,
        auth.user.id,
        &body.full_name,
        role,
        body.phone.as_deref(),
        body.avatar_url.as_deref(),
    )
    .await
    .map_err(|e| profile_error_to_status(&e))?;
    Ok(Json(profile))
}

#[derive(Deserialize)]
pub struct UpdateProfileBody {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
}

/// `PATCH /api/profiles/me` — update the caller's display fields.
pub async fn update_my_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<UpdateProfileBody>,
) -> Result<Json<ProfileRow>, StatusCode> {
    if body.full_name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(StatusCode::BAD_REQUEST);
    }

    let profile = profile::update_profile(
        &state.pool,
        auth.user.id,
        body.full_name.as_deref(),
        body.phone.as_deref(),
        body.avatar_url.as_deref(),
    )
    .await
    .map_err(|e| profile_error_to_status(&e))?;
    Ok(Json(profile))
}

#[cfg(test)]
#[path = "profiles_test.rs"]
mod tests;
