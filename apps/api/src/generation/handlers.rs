//! Axum route handlers for draft generation.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::generator::generate_sections;
use crate::materials::extract_text;
use crate::models::inputs::{Attachment, InputBundle};
use crate::models::module::Module;
use crate::sections::handlers::SectionView;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub generated: Vec<Module>,
    pub sections: Vec<SectionView>,
}

/// Form fields of a generation request, before validation.
#[derive(Debug, Default)]
pub struct GenerateForm {
    pub bundle: InputBundle,
    pub modules: Vec<Module>,
}

impl GenerateForm {
    /// Reads the multipart form. Files are read into memory; the material
    /// file is turned into background text right away.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = GenerateForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().map(str::to_string);

            match name.as_str() {
                "material" => {
                    let data = field.bytes().await?;
                    if !data.is_empty() {
                        form.bundle.background_text = extract_text(&file_name, &data);
                    }
                }
                "transcript" => {
                    let data = field.bytes().await?;
                    if !data.is_empty() {
                        let mime = Attachment::infer_mime_type(&file_name, content_type.as_deref())
                            .ok_or_else(|| {
                                AppError::Validation(format!(
                                    "Transcript '{file_name}' must be a PDF, PNG or JPEG"
                                ))
                            })?;
                        form.bundle.transcript = Some(Attachment::new(mime, data));
                    }
                }
                "curriculum_image" => {
                    let data = field.bytes().await?;
                    if !data.is_empty() {
                        let mime = Attachment::infer_mime_type(&file_name, content_type.as_deref())
                            .filter(|m| m.starts_with("image/"))
                            .ok_or_else(|| {
                                AppError::Validation(format!(
                                    "Curriculum screenshot '{file_name}' must be a PNG or JPEG"
                                ))
                            })?;
                        form.bundle.curriculum_images.push(Attachment::new(mime, data));
                    }
                }
                "strategy" => form.bundle.advisor_strategy = field.text().await?,
                "target_program" => form.bundle.target_program = field.text().await?,
                "curriculum_text" => form.bundle.curriculum_text = field.text().await?,
                "module" => {
                    let value = field.text().await?;
                    let module = value
                        .parse::<Module>()
                        .map_err(|e| AppError::Validation(e.to_string()))?;
                    form.modules.push(module);
                }
                other => {
                    return Err(AppError::Validation(format!(
                        "Unexpected form field '{other}'"
                    )))
                }
            }
        }

        if form.modules.is_empty() {
            form.modules = Module::ALL.to_vec();
        }
        Ok(form)
    }
}

/// POST /api/v1/drafts/generate
///
/// Multipart: material, transcript, strategy, target_program, curriculum_text,
/// curriculum_image (repeatable), module (repeatable; defaults to all five).
/// Drafts every selected module sequentially and returns all sections.
pub async fn handle_generate(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<GenerateResponse>, AppError> {
    let GenerateForm { mut bundle, modules } = GenerateForm::from_multipart(multipart).await?;

    let mut session = state.session.lock().await;
    let session = &mut *session;

    // A blank form field keeps the target chosen when the session started.
    let target_program = match bundle.target_program.trim() {
        "" => session.target_program.clone(),
        given => given.to_string(),
    };
    bundle.target_program = target_program.clone();

    info!(
        "Generating {} module(s) for '{}' in session {}",
        modules.len(),
        target_program,
        session.id
    );

    let generated = generate_sections(
        &session.gateway,
        &mut session.sections,
        bundle,
        &modules,
        state.progress.as_ref(),
    )
    .await?;

    session.target_program = target_program;

    Ok(Json(GenerateResponse {
        generated,
        sections: SectionView::all(&session.sections),
    }))
}
