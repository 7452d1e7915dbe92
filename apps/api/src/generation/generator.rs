//! Section generation — drafts every selected module, one model call each.
//!
//! Flow: check credential → validate inputs → for each module in display
//!       order: build_prompt → gateway.invoke → parse → store.
//!
//! Calls are strictly sequential. A failed call still produces a section: the
//! gateway's error string becomes the draft and the advisor retries by hand.

use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::builder::build_prompt;
use crate::generation::progress::ProgressReporter;
use crate::generation::response::MotivationResponse;
use crate::llm_client::{is_gateway_error, ModelGateway};
use crate::materials::is_extraction_error;
use crate::models::inputs::InputBundle;
use crate::models::module::Module;
use crate::sections::store::SectionStore;

/// Generates drafts for `modules` and writes them into `store`.
///
/// Returns the generated modules in display order. Duplicate selections are
/// generated once.
pub async fn generate_sections(
    gateway: &ModelGateway,
    store: &mut SectionStore,
    bundle: InputBundle,
    modules: &[Module],
    progress: &dyn ProgressReporter,
) -> Result<Vec<Module>, AppError> {
    if !gateway.has_credential() {
        return Err(AppError::MissingCredential);
    }

    let mut selected = modules.to_vec();
    selected.sort();
    selected.dedup();

    bundle
        .check_required(&selected)
        .map_err(AppError::Validation)?;

    if is_extraction_error(&bundle.background_text) {
        warn!("Background material could not be read; continuing with the error text as context");
    }

    let context = Some(bundle.background_text.as_str()).filter(|t| !t.trim().is_empty());
    let total = selected.len();

    for (index, &module) in selected.iter().enumerate() {
        let step = index + 1;
        progress.module_started(module, step, total);

        let prompt = build_prompt(module, &bundle);
        let raw = gateway
            .invoke(&prompt.text, &prompt.attachments, context)
            .await;

        if is_gateway_error(&raw) {
            warn!("Model call for {module} failed; storing the error text as the draft");
        }

        let (draft, research_note) = match module {
            Module::Motivation => MotivationResponse::parse(&raw).into_parts(),
            _ => (raw.trim().to_string(), None),
        };

        store.record_generation(module, draft, research_note);
        progress.module_finished(module, step, total);
    }

    info!("Generated {total} section(s) with model {}", gateway.model());
    Ok(selected)
}
