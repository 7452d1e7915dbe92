//! Material Reader — turns uploaded résumés and material sheets into plain text.
//!
//! Extraction never fails loudly: callers receive either the extracted text or
//! a readable `Error reading …` line that still flows into the prompt context.

pub mod docx;
pub mod handlers;
pub mod pdf;

use thiserror::Error;
use tracing::warn;

/// Every failure string produced by [`extract_text`] starts with this prefix.
pub const EXTRACTION_ERROR_PREFIX: &str = "Error reading";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid document archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("missing document part {0}")]
    MissingPart(String),

    #[error("XML parsing error: {0}")]
    Xml(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Pdf(String),
}

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialFormat {
    Docx,
    Pdf,
}

impl MaterialFormat {
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let lower = file_name.to_ascii_lowercase();
        if lower.ends_with(".docx") {
            Some(MaterialFormat::Docx)
        } else if lower.ends_with(".pdf") {
            Some(MaterialFormat::Pdf)
        } else {
            None
        }
    }

    fn describe(self) -> &'static str {
        match self {
            MaterialFormat::Docx => "Word",
            MaterialFormat::Pdf => "PDF",
        }
    }
}

/// Best-effort text extraction keyed on the file extension.
///
/// Unsupported extensions yield an empty string. Parse failures yield
/// `Error reading <Word|PDF> file: <reason>` instead of an error value.
pub fn extract_text(file_name: &str, bytes: &[u8]) -> String {
    let Some(format) = MaterialFormat::from_file_name(file_name) else {
        warn!("Ignoring material '{file_name}': only .docx and .pdf are supported");
        return String::new();
    };

    let result = match format {
        MaterialFormat::Docx => docx::extract_docx_text(bytes),
        MaterialFormat::Pdf => pdf::extract_pdf_text(bytes),
    };

    match result {
        Ok(text) => text,
        Err(e) => {
            warn!("Failed to extract '{file_name}': {e}");
            format!("{EXTRACTION_ERROR_PREFIX} {} file: {e}", format.describe())
        }
    }
}

/// True when `text` is an inline extraction failure rather than usable prose.
pub fn is_extraction_error(text: &str) -> bool {
    text.trim_start().starts_with(EXTRACTION_ERROR_PREFIX)
}
