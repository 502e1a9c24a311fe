mod db;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    // Google OAuth is optional: password auth still works without it.
    let google = match services::auth::GoogleConfig::from_env() {
        Some(config) => {
            tracing::info!("Google OAuth configured");
            Some(config)
        }
        None => {
            tracing::warn!("Google OAuth env vars missing; OAuth sign-in disabled");
            None
        }
    };

    let state = state::AppState::new(pool, google);

    let app = routes::leptos_app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "volunteerly listening");
    axum::serve(listener, app).await.expect("server failed");
}
