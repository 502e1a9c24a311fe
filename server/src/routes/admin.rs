//! Admin routes: account listing, role changes, soft delete/restore.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::routes::profiles::{profile_error_to_status, require_role};
use crate::services::profile::{self, AdminUserRow, Role};
use crate::state::AppState;

/// `GET /api/admin/users` — all profiles joined with auth emails.
pub async fn list_users(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Vec<AdminUserRow>>, StatusCode> {
    require_role(&state.pool, auth.user.id, Role::Admin).await?;
    let rows = profile::list_users(&state.pool)
        .await
        .map_err(|e| profile_error_to_status(&e))?;
    Ok(Json(rows))
}

#[derive(Deserialize)]
pub struct SetRoleBody {
    pub role: String,
}

/// `PATCH /api/admin/users/{id}/role` — change a user's role. Admins may not
/// change their own role, which would allow locking the last admin out.
pub async fn set_role(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
    Json(body): Json<SetRoleBody>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    require_role(&state.pool, auth.user.id, Role::Admin).await?;
    let Some(role) = Role::from_str(&body.role) else {
        return Err(StatusCode::BAD_REQUEST);
    };
    if user_id == auth.user.id {
        return Err(StatusCode::BAD_REQUEST);
    }

    profile::set_role(&state.pool, user_id, role)
        .await
        .map_err(|e| profile_error_to_status(&e))?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

#[derive(Deserialize)]
pub struct SetDeletedBody {
    pub is_deleted: bool,
}

/// `PATCH /api/admin/users/{id}/deleted` — soft-delete or restore a user.
pub async fn set_deleted(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
    Json(body): Json<SetDeletedBody>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    require_role(&state.pool, auth.user.id, Role::Admin).await?;
    if user_id == auth.user.id {
        return Err(StatusCode::BAD_REQUEST);
    }

    profile::set_deleted(&state.pool, user_id, body.is_deleted)
        .await
        .map_err(|e| profile_error_to_status(&e))?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

#[cfg(test)]
#[path = "admin_test.rs"]
mod tests;
