//! Axum route handlers for reviewing, revising, translating and exporting drafts.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::module::Module;
use crate::sections::export::{export_document, export_file_name};
use crate::sections::revision::{revise_section, FeedbackRequest};
use crate::sections::store::{Section, SectionStore};
use crate::sections::translator::translate_section;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    pub module: Module,
    pub label: &'static str,
    pub draft_text: String,
    pub research_note: Option<String>,
    pub translation: Option<String>,
}

impl SectionView {
    pub fn new(module: Module, section: &Section) -> Self {
        Self {
            module,
            label: module.label(),
            draft_text: section.draft_text().to_string(),
            research_note: section.research_note().map(str::to_string),
            translation: section.translation().map(str::to_string),
        }
    }

    pub fn all(store: &SectionStore) -> Vec<SectionView> {
        store
            .sections()
            .map(|(module, section)| SectionView::new(module, section))
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct EditRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExportPreview {
    pub file_name: String,
    pub content: String,
}

fn parse_module(raw: &str) -> Result<Module, AppError> {
    raw.parse::<Module>()
        .map_err(|e| AppError::Validation(e.to_string()))
}

fn section_view(store: &SectionStore, module: Module) -> Result<SectionView, AppError> {
    store
        .get(module)
        .map(|section| SectionView::new(module, section))
        .ok_or_else(|| AppError::NotFound(format!("No draft for module '{module}' yet")))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/drafts
pub async fn handle_list_sections(State(state): State<AppState>) -> Json<Vec<SectionView>> {
    let session = state.session.lock().await;
    Json(SectionView::all(&session.sections))
}

/// GET /api/v1/drafts/:module
pub async fn handle_get_section(
    State(state): State<AppState>,
    Path(module): Path<String>,
) -> Result<Json<SectionView>, AppError> {
    let module = parse_module(&module)?;
    let session = state.session.lock().await;
    Ok(Json(section_view(&session.sections, module)?))
}

/// PUT /api/v1/drafts/:module
///
/// Direct edit by the advisor. A changed draft loses its translation.
pub async fn handle_edit_section(
    State(state): State<AppState>,
    Path(module): Path<String>,
    Json(request): Json<EditRequest>,
) -> Result<Json<SectionView>, AppError> {
    let module = parse_module(&module)?;
    let mut session = state.session.lock().await;

    if !session.sections.replace_draft(module, request.text) {
        return Err(AppError::NotFound(format!(
            "No draft for module '{module}' yet"
        )));
    }
    Ok(Json(section_view(&session.sections, module)?))
}

/// POST /api/v1/drafts/:module/revise
pub async fn handle_revise_section(
    State(state): State<AppState>,
    Path(module): Path<String>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<SectionView>, AppError> {
    let module = parse_module(&module)?;
    let mut session = state.session.lock().await;
    let session = &mut *session;

    revise_section(&session.gateway, &mut session.sections, module, &request).await?;
    Ok(Json(section_view(&session.sections, module)?))
}

/// POST /api/v1/drafts/:module/translate
pub async fn handle_translate_section(
    State(state): State<AppState>,
    Path(module): Path<String>,
) -> Result<Json<SectionView>, AppError> {
    let module = parse_module(&module)?;
    let mut session = state.session.lock().await;
    let session = &mut *session;

    translate_section(&session.gateway, &mut session.sections, module).await?;
    Ok(Json(section_view(&session.sections, module)?))
}

/// GET /api/v1/export/preview
pub async fn handle_export_preview(State(state): State<AppState>) -> Json<ExportPreview> {
    let session = state.session.lock().await;
    Json(ExportPreview {
        file_name: export_file_name(&session.target_program, &state.config.version_tag),
        content: export_document(&session.sections),
    })
}

/// GET /api/v1/export
///
/// Downloads the assembled document as a UTF-8 text file.
pub async fn handle_export(State(state): State<AppState>) -> Result<Response, AppError> {
    let session = state.session.lock().await;
    if session.sections.is_empty() {
        return Err(AppError::NotFound(
            "Nothing to export: no module has been drafted yet".to_string(),
        ));
    }

    let file_name = export_file_name(&session.target_program, &state.config.version_tag);
    let disposition = format!(
        "attachment; filename=\"export.txt\"; filename*=UTF-8''{}",
        urlencoding::encode(&file_name)
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export_document(&session.sections),
    )
        .into_response())
}
