//! Event rows: volunteer events created and managed by organizations.

use serde::Serialize;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("event not found: {0}")]
    NotFound(Uuid),
    #[error("not the organizer of event {0}")]
    Forbidden(Uuid),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct EventRow {
    pub id: Uuid,
    pub organizer_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    /// ISO 8601 timestamp.
    pub event_date: String,
    pub image_url: Option<String>,
    pub created_at: Option<String>,
}

const EVENT_COLUMNS: &str = r#"id, organizer_id, title, description, location,
    to_char(event_date AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS event_date,
    image_url,
    to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at"#;

fn row_to_event(row: &sqlx::postgres::PgRow) -> EventRow {
    EventRow {
        id: row.get("id"),
        organizer_id: row.get("organizer_id"),
        title: row.get("title"),
        description: row.get("description"),
        location: row.get("location"),
        event_date: row.get("event_date"),
        image_url: row.get("image_url"),
        created_at: row.get("created_at"),
    }
}

/// All events ordered by event date, soonest first.
pub async fn list_events(pool: &PgPool) -> Result<Vec<EventRow>, EventError> {
    let rows = sqlx::query(&format!("SELECT {EVENT_COLUMNS} FROM events ORDER BY event_date ASC"))
        .fetch_all(pool)
        .await?;
    Ok(rows.iter().map(row_to_event).collect())
}

/// One event by id.
pub async fn get_event(pool: &PgPool, event_id: Uuid) -> Result<EventRow, EventError> {
    let row = sqlx::query(&format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"))
        .bind(event_id)
        .fetch_optional(pool)
        .await?
        .ok_or(EventError::NotFound(event_id))?;
    Ok(row_to_event(&row))
}

/// Events created by one organizer, newest first.
pub async fn list_by_organizer(pool: &PgPool, organizer_id: Uuid) -> Result<Vec<EventRow>, EventError> {
    let rows = sqlx::query(&format!(
        "SELECT {EVENT_COLUMNS} FROM events WHERE organizer_id = $1 ORDER BY created_at DESC"
    ))
    .bind(organizer_id)
    .fetch_all(pool)
    .await?;
    Ok(rows.iter().map(row_to_event).collect())
}

pub struct NewEvent<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub location: &'a str,
    /// ISO 8601 timestamp; parsed by Postgres.
    pub event_date: &'a str,
    pub image_url: Option<&'a str>,
}

/// Create an event owned by `organizer_id`.
pub async fn create_event(pool: &PgPool, organizer_id: Uuid, new: NewEvent<'_>) -> Result<EventRow, EventError> {
    let row = sqlx::query(&format!(
        r"INSERT INTO events (organizer_id, title, description, location, event_date, image_url)
          VALUES ($1, $2, $3, $4, $5::timestamptz, $6)
          RETURNING {EVENT_COLUMNS}"
    ))
    .bind(organizer_id)
    .bind(new.title.trim())
    .bind(new.description)
    .bind(new.location.trim())
    .bind(new.event_date)
    .bind(new.image_url)
    .fetch_one(pool)
    .await?;
    Ok(row_to_event(&row))
}

/// Update an event; only its organizer may do so.
pub async fn update_event(
    pool: &PgPool,
    event_id: Uuid,
    organizer_id: Uuid,
    new: NewEvent<'_>,
) -> Result<EventRow, EventError> {
    require_organizer(pool, event_id, organizer_id).await?;

    let row = sqlx::query(&format!(
        r"UPDATE events
          SET title = $3, description = $4, location = $5, event_date = $6::timestamptz, image_url = $7
          WHERE id = $1 AND organizer_id = $2
          RETURNING {EVENT_COLUMNS}"
    ))
    .bind(event_id)
    .bind(organizer_id)
    .bind(new.title.trim())
    .bind(new.description)
    .bind(new.location.trim())
    .bind(new.event_date)
    .bind(new.image_url)
    .fetch_optional(pool)
    .await?
    .ok_or(EventError::NotFound(event_id))?;
    Ok(row_to_event(&row))
}

/// Delete an event; only its organizer may do so. Applications cascade.
pub async fn delete_event(pool: &PgPool, event_id: Uuid, organizer_id: Uuid) -> Result<(), EventError> {
    require_organizer(pool, event_id, organizer_id).await?;

    sqlx::query("DELETE FROM events WHERE id = $1")
        .bind(event_id)
        .execute(pool)
        .await?;
    Ok(())
}

pub(crate) async fn require_organizer(pool: &PgPool, event_id: Uuid, user_id: Uuid) -> Result<(), EventError> {
    let row = sqlx::query("SELECT organizer_id FROM events WHERE id = $1")
        .bind(event_id)
        .fetch_optional(pool)
        .await?
        .ok_or(EventError::NotFound(event_id))?;
    let organizer: Uuid = row.get("organizer_id");
    if organizer != user_id {
        return Err(EventError::Forbidden(event_id));
    }
    Ok(())
}

#[cfg(test)]
#[path = "event_test.rs"]
mod tests;
