use axum::{extract::Multipart, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::materials::{extract_text, is_extraction_error};

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub file_name: String,
    pub text: String,
    pub is_error: bool,
}

/// POST /api/v1/materials/extract
///
/// Previews the text that generation would use as background context.
pub async fn handle_extract(mut multipart: Multipart) -> Result<Json<ExtractResponse>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await?;
        let text = extract_text(&file_name, &data);
        return Ok(Json(ExtractResponse {
            is_error: is_extraction_error(&text),
            file_name,
            text,
        }));
    }

    Err(AppError::Validation(
        "Upload a .docx or .pdf file in the 'file' field".to_string(),
    ))
}
