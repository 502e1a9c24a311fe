//! Volunteer applications: one row per (event, volunteer) pair.

use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::event::{self, EventError};

/// Closed application status set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    #[must_use]
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error("application not found: {0}")]
    NotFound(Uuid),
    #[error("already applied to event {0}")]
    AlreadyApplied(Uuid),
    #[error("invalid status: {0}")]
    InvalidStatus(String),
    #[error(transparent)]
    Event(#[from] EventError),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplicationRow {
    pub id: Uuid,
    pub event_id: Uuid,
    pub volunteer_id: Uuid,
    pub status: ApplicationStatus,
    pub message: Option<String>,
    pub created_at: Option<String>,
}

/// An application joined with the applicant's profile fields, as shown on
/// the organization dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicantRow {
    #[serde(flatten)]
    pub application: ApplicationRow,
    pub full_name: Option<String>,
    pub phone: Option<String>,
}

fn row_status(row: &sqlx::postgres::PgRow) -> Result<ApplicationStatus, ApplicationError> {
    let raw: String = row.get("status");
    ApplicationStatus::from_str(&raw).ok_or(ApplicationError::InvalidStatus(raw))
}

fn row_to_application(row: &sqlx::postgres::PgRow) -> Result<ApplicationRow, ApplicationError> {
    Ok(ApplicationRow {
        id: row.get("id"),
        event_id: row.get("event_id"),
        volunteer_id: row.get("volunteer_id"),
        status: row_status(row)?,
        message: row.get("message"),
        created_at: row.get("created_at"),
    })
}

const APPLICATION_COLUMNS: &str = r#"id, event_id, volunteer_id, status, message,
    to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at"#;

/// Apply to an event as a volunteer. Rejects duplicate applications.
pub async fn apply(
    pool: &PgPool,
    event_id: Uuid,
    volunteer_id: Uuid,
    message: Option<&str>,
) -> Result<ApplicationRow, ApplicationError> {
    // Surface a clean 404 before hitting the FK.
    event::get_event(pool, event_id).await?;

    let row = sqlx::query(&format!(
        r"INSERT INTO volunteer_applications (event_id, volunteer_id, message)
          VALUES ($1, $2, $3)
          RETURNING {APPLICATION_COLUMNS}"
    ))
    .bind(event_id)
    .bind(volunteer_id)
    .bind(message)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if e.as_database_error().is_some_and(|d| d.is_unique_violation()) {
            ApplicationError::AlreadyApplied(event_id)
        } else {
            ApplicationError::Db(e)
        }
    })?;
    row_to_application(&row)
}

/// Applicants for an event, joined with profile name/phone, oldest first.
/// Only the event's organizer may list them.
pub async fn list_applicants(
    pool: &PgPool,
    event_id: Uuid,
    organizer_id: Uuid,
) -> Result<Vec<ApplicantRow>, ApplicationError> {
    event::require_organizer(pool, event_id, organizer_id).await?;

    let rows = sqlx::query(
        r#"SELECT a.id, a.event_id, a.volunteer_id, a.status, a.message,
                  to_char(a.created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at,
                  p.full_name, p.phone
           FROM volunteer_applications a
           LEFT JOIN profiles p ON p.id = a.volunteer_id
           WHERE a.event_id = $1
           ORDER BY a.created_at ASC"#,
    )
    .bind(event_id)
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|r| {
            Ok(ApplicantRow {
                application: row_to_application(r)?,
                full_name: r.get("full_name"),
                phone: r.get("phone"),
            })
        })
        .collect()
}

/// A volunteer's own applications, newest first.
pub async fn list_by_volunteer(pool: &PgPool, volunteer_id: Uuid) -> Result<Vec<ApplicationRow>, ApplicationError> {
    let rows = sqlx::query(&format!(
        "SELECT {APPLICATION_COLUMNS} FROM volunteer_applications WHERE volunteer_id = $1 ORDER BY created_at DESC"
    ))
    .bind(volunteer_id)
    .fetch_all(pool)
    .await?;
    rows.iter().map(row_to_application).collect()
}

/// Approve or reject an application. Only the organizer of the application's
/// event may change its status.
pub async fn set_status(
    pool: &PgPool,
    application_id: Uuid,
    organizer_id: Uuid,
    status: ApplicationStatus,
) -> Result<ApplicationRow, ApplicationError> {
    let row = sqlx::query("SELECT event_id FROM volunteer_applications WHERE id = $1")
        .bind(application_id)
        .fetch_optional(pool)
        .await?
        .ok_or(ApplicationError::NotFound(application_id))?;
    let event_id: Uuid = row.get("event_id");
    event::require_organizer(pool, event_id, organizer_id).await?;

    let row = sqlx::query(&format!(
        r"UPDATE volunteer_applications SET status = $2 WHERE id = $1
          RETURNING {APPLICATION_COLUMNS}"
    ))
    .bind(application_id)
    .bind(status.as_str())
    .fetch_optional(pool)
    .await?
    .ok_or(ApplicationError::NotFound(application_id))?;
    row_to_application(&row)
}

#[cfg(test)]
#[path = "application_test.rs"]
mod tests;
