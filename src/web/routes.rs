use super::handlers;
use super::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

pub fn public_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::public::index))
        .route("/health", get(handlers::public::health))
        .route("/app", get(handlers::public::upload_page))
}

pub fn upload_routes() -> Router<Arc<AppState>> {
    // Large files are passed through untouched, so no local body cap.
    Router::new().route(
        "/upload",
        post(handlers::upload::upload).layer(DefaultBodyLimit::disable()),
    )
}
