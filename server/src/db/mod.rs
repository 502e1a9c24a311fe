//! Postgres pool construction and schema migrations.
//!
//! Startup calls `init_pool` once; migrations under `src/db/migrations/`
//! run before the router accepts traffic, so handlers can assume the
//! volunteer schema (users, sessions, profiles, events, applications) is in
//! place.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

fn pool_size(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(5)
}

/// Connect to Postgres and bring the schema up to date. Pool size comes
/// from `DB_MAX_CONNECTIONS` (default 5; zero and garbage fall back).
///
/// # Errors
///
/// Returns an error if the connection or a migration fails.
pub async fn init_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let size = pool_size(std::env::var("DB_MAX_CONNECTIONS").ok().as_deref());
    let pool = PgPoolOptions::new()
        .max_connections(size)
        .connect(database_url)
        .await?;

    sqlx::migrate!("src/db/migrations").run(&pool).await?;

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_size_defaults_when_unset_or_garbage() {
        assert_eq!(pool_size(None), 5);
        assert_eq!(pool_size(Some("not-a-number")), 5);
        assert_eq!(pool_size(Some("")), 5);
    }

    #[test]
    fn pool_size_parses_and_trims() {
        assert_eq!(pool_size(Some("12")), 12);
        assert_eq!(pool_size(Some(" 8 ")), 8);
    }

    #[test]
    fn pool_size_rejects_zero() {
        assert_eq!(pool_size(Some("0")), 5);
    }
}
