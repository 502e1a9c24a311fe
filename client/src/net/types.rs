//! Wire DTOs for the client/server REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads so serde round-trips stay
//! lossless. Identifiers travel as UUID strings; the client never parses
//! them, only passes them back.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Closed role set. Determines which protected routes a user may reach.
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
}

/// Application status as stored on the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    /// Wire form sent in status updates.
    #[must_use]
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Label shown in applicant lists.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

/// The authenticated identity carried inside a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Login email, if the account has one.
    pub email: Option<String>,
}

/// An authenticated session as returned by `/api/auth/session`. The token
/// itself lives in an HttpOnly cookie; this payload is the inspectable part.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
}

/// A role-bearing profile row, keyed by user id. May not exist yet for a
/// freshly created account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Owning user identifier (UUID string).
    pub id: String,
    pub full_name: String,
    pub role: Role,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub is_deleted: bool,
    pub created_at: Option<String>,
}

/// A volunteer event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub organizer_id: String,
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    /// ISO 8601 timestamp.
    pub event_date: String,
    pub image_url: Option<String>,
    pub created_at: Option<String>,
}

/// A volunteer application row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub event_id: String,
    pub volunteer_id: String,
    pub status: ApplicationStatus,
    pub message: Option<String>,
    pub created_at: Option<String>,
}

/// An application joined with the applicant's profile fields, as listed on
/// the organization dashboard. The server flattens the join into one object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub id: String,
    pub event_id: String,
    pub volunteer_id: String,
    pub status: ApplicationStatus,
    pub message: Option<String>,
    pub created_at: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
}

/// A profile joined with its auth email, as listed on the admin dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub full_name: String,
    pub role: Role,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub is_deleted: bool,
    pub created_at: Option<String>,
    pub email: Option<String>,
}
