pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod questions;
pub mod rooms;
pub mod uuid_guard;

use axum::{Router, extract::FromRef, routing::get};
use sqlx::SqlitePool;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use error::{AppError, AppResult};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db_pool: SqlitePool,
}

/// Builds the full application router. CORS is layered on by the binary
/// because the allowed origin comes from runtime configuration.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(rooms::router())
        .merge(questions::router())
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
