pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::db::Database;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url, config.db_max_connections).await?;

    tracing::info!("Running migrations...");
    db.run_migrations().await?;

    let state = AppState { db: Arc::new(db) };
    let app = build_router(state, &config);

    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the full router: API, admin uploads and static pages.
pub fn build_router(state: AppState, config: &Config) -> Router {
    let public = &config.public_dir;
    let learner_page = public.join("game-interface.html");
    let admin_page = public.join("admin-interface-new.html");

    let upload_routes = Router::new()
        .route("/api/admin/upload/choice", post(routes::upload::choice))
        .route("/api/admin/upload/flashcard", post(routes::upload::flashcard))
        .route("/api/admin/upload/cloze", post(routes::upload::cloze))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes));

    Router::new()
        .route("/health", get(health_check))
        .route("/api/questions/choice-bank", get(routes::bank::choice_bank))
        .route("/api/questions/cloze-bank", get(routes::bank::cloze_bank))
        .merge(upload_routes)
        // Pages
        .route_service("/", ServeFile::new(public.join("main-interface.html")))
        .route_service("/learn", ServeFile::new(&learner_page))
        .route_service("/game-interface.html", ServeFile::new(&learner_page))
        .route_service("/admin", ServeFile::new(&admin_page))
        .route_service("/admin-interface-new.html", ServeFile::new(&admin_page))
        .fallback_service(ServeDir::new(public))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
