//! Profile rows: role-bearing application records keyed by user id.

use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Closed role set. Determines which protected pages a user may reach.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Volunteer,
    Organization,
    Admin,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Volunteer => "volunteer",
            Self::Organization => "organization",
            Self::Admin => "admin",
        }
    }

    #[must_use]
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "volunteer" => Some(Self::Volunteer),
            "organization" => Some(Self::Organization),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("profile not found: {0}")]
    NotFound(Uuid),
    #[error("profile already exists: {0}")]
    AlreadyExists(Uuid),
    #[error("invalid role: {0}")]
    InvalidRole(String),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// A profile row as served to clients.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileRow {
    pub id: Uuid,
    pub full_name: String,
    pub role: Role,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub is_deleted: bool,
    pub created_at: Option<String>,
}

fn row_to_profile(row: &sqlx::postgres::PgRow) -> Result<ProfileRow, ProfileError> {
    let raw_role: String = row.get("role");
    let role = Role::from_str(&raw_role).ok_or_else(|| ProfileError::InvalidRole(raw_role))?;
    Ok(ProfileRow {
        id: row.get("id"),
        full_name: row.get("full_name"),
        role,
        phone: row.get("phone"),
        avatar_url: row.get("avatar_url"),
        is_deleted: row.get("is_deleted"),
        created_at: row.get("created_at"),
    })
}

const PROFILE_COLUMNS: &str = r"id, full_name, role, phone, avatar_url, is_deleted,
    to_char(created_at, 'YYYY-MM-DD') AS created_at";

/// Fetch one profile by user id. `Ok(None)` when no row exists; a missing
/// profile is a valid state for a freshly provisioned account, not an error.
pub async fn get_profile(pool: &PgPool, user_id: Uuid) -> Result<Option<ProfileRow>, ProfileError> {
    let row = sqlx::query(&format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1"))
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    row.as_ref().map(row_to_profile).transpose()
}

/// Provision a profile for a user that does not yet have one.
pub async fn create_profile(
    pool: &PgPool,
    user_id: Uuid,
    full_name: &str,
    role: Role,
    phone: Option<&str>,
    avatar_url: Option<&str>,
) -> Result<ProfileRow, ProfileError> {
    let row = sqlx::query(&format!(
        r"INSERT INTO profiles (id, full_name, role, phone, avatar_url)
          VALUES ($1, $2, $3, $4, $5)
          RETURNING {PROFILE_COLUMNS}"
    ))
    .bind(user_id)
    .bind(full_name.trim())
    .bind(role.as_str())
    .bind(phone)
    .bind(avatar_url)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if e.as_database_error().is_some_and(|d| d.is_unique_violation()) {
            ProfileError::AlreadyExists(user_id)
        } else {
            ProfileError::Db(e)
        }
    })?;
    row_to_profile(&row)
}

/// Update display fields of the caller's own profile.
pub async fn update_profile(
    pool: &PgPool,
    user_id: Uuid,
    full_name: Option<&str>,
    phone: Option<&str>,
    avatar_url: Option<&str>,
) -> Result<ProfileRow, ProfileError> {
    let row = sqlx::query(&format!(
        r"UPDATE profiles
          SET full_name = COALESCE($2, full_name),
              phone = COALESCE($3, phone),
              avatar_url = COALESCE($4, avatar_url)
          WHERE id = $1
          RETURNING {PROFILE_COLUMNS}"
    ))
    .bind(user_id)
    .bind(full_name.map(str::trim))
    .bind(phone)
    .bind(avatar_url)
    .fetch_optional(pool)
    .await?
    .ok_or(ProfileError::NotFound(user_id))?;
    row_to_profile(&row)
}

/// Admin view: every profile joined with its auth email.
#[derive(Debug, Clone, Serialize)]
pub struct AdminUserRow {
    #[serde(flatten)]
    pub profile: ProfileRow,
    pub email: Option<String>,
}

/// List all profiles with auth emails, newest accounts first. Admin only;
/// the role check lives in the route layer.
pub async fn list_users(pool: &PgPool) -> Result<Vec<AdminUserRow>, ProfileError> {
    let rows = sqlx::query(
        r"SELECT p.id, p.full_name, p.role, p.phone, p.avatar_url, p.is_deleted,
                 to_char(p.created_at, 'YYYY-MM-DD') AS created_at,
                 u.email
          FROM profiles p
          JOIN users u ON u.id = p.id
          ORDER BY p.created_at DESC",
    )
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|r| {
            Ok(AdminUserRow {
                profile: row_to_profile(r)?,
                email: r.get("email"),
            })
        })
        .collect()
}

/// Admin: change a user's role.
pub async fn set_role(pool: &PgPool, user_id: Uuid, role: Role) -> Result<(), ProfileError> {
    let result = sqlx::query("UPDATE profiles SET role = $2 WHERE id = $1")
        .bind(user_id)
        .bind(role.as_str())
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(ProfileError::NotFound(user_id));
    }
    Ok(())
}

/// Admin: soft-delete or restore an account.
pub async fn set_deleted(pool: &PgPool, user_id: Uuid, deleted: bool) -> Result<(), ProfileError> {
    let result = sqlx::query("UPDATE profiles SET is_deleted = $2 WHERE id = $1")
        .bind(user_id)
        .bind(deleted)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(ProfileError::NotFound(user_id));
    }
    Ok(())
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
