use bytes::Bytes;

use crate::models::module::Module;

/// Binary media forwarded to the model alongside a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub mime_type: String,
    pub data: Bytes,
}

impl Attachment {
    pub fn new(mime_type: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Infers the MIME type of an uploaded transcript or screenshot.
    ///
    /// Prefers the declared content type, falls back to the file extension.
    /// Returns `None` for anything that is not a PDF, PNG or JPEG.
    pub fn infer_mime_type(file_name: &str, declared: Option<&str>) -> Option<&'static str> {
        let from_declared = declared.and_then(|ct| match ct.to_ascii_lowercase().as_str() {
            "application/pdf" => Some("application/pdf"),
            "image/png" => Some("image/png"),
            "image/jpeg" | "image/jpg" => Some("image/jpeg"),
            _ => None,
        });
        from_declared.or_else(|| {
            let ext = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
            match ext.as_str() {
                "pdf" => Some("application/pdf"),
                "png" => Some("image/png"),
                "jpg" | "jpeg" => Some("image/jpeg"),
                _ => None,
            }
        })
    }
}

/// Everything the advisor and student supplied for one generation run.
///
/// Built when generation is triggered and dropped afterwards.
#[derive(Debug, Clone, Default)]
pub struct InputBundle {
    /// Text extracted from the uploaded résumé or material sheet.
    pub background_text: String,
    pub advisor_strategy: String,
    pub target_program: String,
    pub curriculum_text: String,
    pub curriculum_images: Vec<Attachment>,
    pub transcript: Option<Attachment>,
}

impl InputBundle {
    pub fn has_curriculum(&self) -> bool {
        !self.curriculum_text.trim().is_empty() || !self.curriculum_images.is_empty()
    }

    /// Checks that the inputs the selected modules depend on are present.
    ///
    /// Returns the human-readable reason for the first missing input.
    pub fn check_required(&self, modules: &[Module]) -> Result<(), String> {
        if modules.is_empty() {
            return Err("Select at least one module to generate".to_string());
        }
        if self.background_text.trim().is_empty() {
            return Err("Background material (résumé or material sheet) is required".to_string());
        }
        if modules.contains(&Module::Academic) && self.transcript.is_none() {
            return Err("A transcript is required for the academic module".to_string());
        }
        if modules.contains(&Module::WhySchool) && !self.has_curriculum() {
            return Err(
                "Curriculum text or screenshots are required for the why-school module".to_string(),
            );
        }
        Ok(())
    }
}
