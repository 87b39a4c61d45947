use crate::services::file_type::ALLOWED_FILE_TYPES;
use crate::web::error::AppResult;
use crate::web::state::AppState;
use axum::extract::State;
use axum::response::Html;
use std::sync::Arc;
use tera::Context;

pub const WELCOME: &str = "Welcome to the Pinata File Upload API!";

pub async fn index() -> &'static str {
    WELCOME
}

pub async fn health() -> &'static str {
    "ok"
}

/// Browser upload form. Posts back to this relay's `/upload`.
pub async fn upload_page(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let mut ctx = Context::new();
    ctx.insert("upload_url", "/upload");
    ctx.insert("allowed_types", &ALLOWED_FILE_TYPES.join(", "));
    ctx.insert("accept", &accept_attribute());

    let html = state.templates.render("upload.html", &ctx)?;
    Ok(Html(html))
}

/// `accept` hint for the file input. Only a hint: the relay also admits
/// files whose MIME type alone matches.
fn accept_attribute() -> String {
    ALLOWED_FILE_TYPES
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",")
}
