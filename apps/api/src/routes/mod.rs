pub mod health;
pub mod session;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::materials::handlers as materials;
use crate::sections::handlers as sections;
use crate::state::AppState;

/// Uploads carry transcripts and several screenshots.
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/session", post(session::handle_start_session))
        .route("/api/v1/materials/extract", post(materials::handle_extract))
        .route("/api/v1/drafts/generate", post(generation::handle_generate))
        .route("/api/v1/drafts", get(sections::handle_list_sections))
        .route(
            "/api/v1/drafts/:module",
            get(sections::handle_get_section).put(sections::handle_edit_section),
        )
        .route(
            "/api/v1/drafts/:module/revise",
            post(sections::handle_revise_section),
        )
        .route(
            "/api/v1/drafts/:module/translate",
            post(sections::handle_translate_section),
        )
        .route("/api/v1/export", get(sections::handle_export))
        .route(
            "/api/v1/export/preview",
            get(sections::handle_export_preview),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
