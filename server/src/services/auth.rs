//! Account authentication service: password sign-up/login and Google OAuth.
//!
//! Passwords are stored as salted SHA-256 digests. OAuth accounts are
//! upserted by their Google subject id and carry no password material.

use rand::Rng;
use sha2::{Digest, Sha256};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::session::bytes_to_hex;

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("password must be at least {MIN_PASSWORD_LEN} characters")]
    WeakPassword,
    #[error("email already registered")]
    EmailTaken,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("google token exchange failed: {0}")]
    TokenExchange(String),
    #[error("google api error: {0}")]
    GoogleApi(String),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || !normalized.contains('@') {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

#[must_use]
pub fn generate_salt() -> String {
    let bytes: [u8; 16] = rand::rng().random();
    bytes_to_hex(&bytes)
}

#[must_use]
pub fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

/// Default avatar for new accounts, seeded by display name.
#[must_use]
pub fn default_avatar_url(full_name: &str) -> String {
    let seed: String = full_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    format!("https://api.dicebear.com/8.x/initials/svg?seed={seed}")
}

/// Create a password account plus its volunteer profile. Returns the user id.
///
/// # Errors
///
/// Returns `EmailTaken` if the email is already registered, `InvalidEmail` /
/// `WeakPassword` on bad input, or `Db` on storage failure.
pub async fn sign_up(pool: &PgPool, email: &str, password: &str, full_name: &str) -> Result<Uuid, AuthError> {
    let normalized = normalize_email(email).ok_or(AuthError::InvalidEmail)?;
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AuthError::WeakPassword);
    }

    let salt = generate_salt();
    let hash = hash_password(&salt, password);

    let row = sqlx::query(
        r"INSERT INTO users (email, password_hash, password_salt)
          VALUES ($1, $2, $3)
          RETURNING id",
    )
    .bind(&normalized)
    .bind(&hash)
    .bind(&salt)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if e.as_database_error().is_some_and(|d| d.is_unique_violation()) {
            AuthError::EmailTaken
        } else {
            AuthError::Db(e)
        }
    })?;
    let user_id: Uuid = row.get("id");

    sqlx::query(
        r"INSERT INTO profiles (id, full_name, role, avatar_url)
          VALUES ($1, $2, 'volunteer', $3)
          ON CONFLICT (id) DO NOTHING",
    )
    .bind(user_id)
    .bind(full_name.trim())
    .bind(default_avatar_url(full_name.trim()))
    .execute(pool)
    .await?;

    Ok(user_id)
}

/// Verify a password login. Returns the user id on success.
///
/// # Errors
///
/// Returns `InvalidCredentials` when the email is unknown or the password
/// does not match; credential failures are indistinguishable on purpose.
pub async fn verify_password(pool: &PgPool, email: &str, password: &str) -> Result<Uuid, AuthError> {
    let normalized = normalize_email(email).ok_or(AuthError::InvalidCredentials)?;

    let row = sqlx::query(
        r"SELECT id, password_hash, password_salt
          FROM users
          WHERE email = $1 AND password_hash IS NOT NULL",
    )
    .bind(&normalized)
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Err(AuthError::InvalidCredentials);
    };

    let salt: String = row.get("password_salt");
    let stored: String = row.get("password_hash");
    if hash_password(&salt, password) != stored {
        return Err(AuthError::InvalidCredentials);
    }

    Ok(row.get("id"))
}

// =============================================================================
// GOOGLE OAUTH
// =============================================================================

/// Google OAuth configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl GoogleConfig {
    /// Load from `GOOGLE_CLIENT_ID`, `GOOGLE_CLIENT_SECRET`, `GOOGLE_REDIRECT_URI`.
    /// Returns `None` if any are missing (OAuth sign-in will be disabled).
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let client_id = std::env::var("GOOGLE_CLIENT_ID").ok()?;
        let client_secret = std::env::var("GOOGLE_CLIENT_SECRET").ok()?;
        let redirect_uri = std::env::var("GOOGLE_REDIRECT_URI").ok()?;
        Some(Self { client_id, client_secret, redirect_uri })
    }

    /// Build the Google authorization URL with a CSRF state value.
    #[must_use]
    pub fn authorize_url(&self, state: &str) -> String {
        format!(
            "https://accounts.google.com/o/oauth2/v2/auth?client_id={}&redirect_uri={}&response_type=code&scope=openid%20email%20profile&state={}",
            self.client_id, self.redirect_uri, state
        )
    }
}

#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Google userinfo payload, trimmed to the fields we store.
#[derive(Debug, serde::Deserialize)]
pub struct GoogleUser {
    pub id: String,
    pub email: Option<String>,
}

/// Exchange an OAuth code for an access token.
///
/// # Errors
///
/// Returns `TokenExchange` if the HTTP call fails or the response is not a
/// token payload.
pub async fn exchange_code(config: &GoogleConfig, code: &str) -> Result<String, AuthError> {
    let client = reqwest::Client::new();
    let resp = client
        .post("https://oauth2.googleapis.com/token")
        .form(&[
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ])
        .send()
        .await
        .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

    let body = resp
        .text()
        .await
        .map_err(|e| AuthError::TokenExchange(e.to_string()))?;
    let token_resp: TokenResponse =
        serde_json::from_str(&body).map_err(|_| AuthError::TokenExchange(format!("unexpected response: {body}")))?;
    Ok(token_resp.access_token)
}

/// Fetch the authenticated Google user's identity.
///
/// # Errors
///
/// Returns `GoogleApi` on transport failure or a non-success status.
pub async fn fetch_google_user(access_token: &str) -> Result<GoogleUser, AuthError> {
    let client = reqwest::Client::new();
    let resp = client
        .get("https://www.googleapis.com/oauth2/v2/userinfo")
        .header("Authorization", format!("Bearer {access_token}"))
        .send()
        .await
        .map_err(|e| AuthError::GoogleApi(e.to_string()))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(AuthError::GoogleApi(format!("{status}: {body}")));
    }

    resp.json::<GoogleUser>()
        .await
        .map_err(|e| AuthError::GoogleApi(e.to_string()))
}

/// Upsert an OAuth account by Google subject id. Returns the user's UUID.
///
/// A profile row is deliberately NOT created here: a brand-new OAuth user has
/// no profile until a registration flow provisions one.
///
/// # Errors
///
/// Returns `Db` on storage failure.
pub async fn upsert_oauth_user(pool: &PgPool, google: &GoogleUser) -> Result<Uuid, AuthError> {
    let email = google.email.as_deref().and_then(normalize_email);
    let row = sqlx::query(
        r"INSERT INTO users (google_id, email)
          VALUES ($1, $2)
          ON CONFLICT (google_id) DO UPDATE SET email = COALESCE(EXCLUDED.email, users.email)
          RETURNING id",
    )
    .bind(&google.id)
    .bind(email)
    .fetch_one(pool)
    .await?;
    Ok(row.get("id"))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
