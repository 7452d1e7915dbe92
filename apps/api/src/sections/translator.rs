//! Translator — English rendition of a finished Chinese draft.
//!
//! Never runs on its own: each call translates the draft present at call time
//! and the result lives only until that draft changes.

use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::{is_gateway_error, ModelGateway};
use crate::models::module::Module;
use crate::sections::prompts::TRANSLATION_RULES;
use crate::sections::store::SectionStore;

/// Style contract first, then the literal draft.
pub fn translation_prompt(draft: &str) -> String {
    format!("{TRANSLATION_RULES}\n{draft}")
}

/// Translates the module's current draft and stores the result.
pub async fn translate_section(
    gateway: &ModelGateway,
    store: &mut SectionStore,
    module: Module,
) -> Result<String, AppError> {
    let draft = store
        .get(module)
        .map(|s| s.draft_text().to_string())
        .ok_or_else(|| AppError::NotFound(format!("No draft for module '{module}' yet")))?;

    if draft.trim().is_empty() {
        return Err(AppError::Validation(format!(
            "The {module} draft is empty; nothing to translate"
        )));
    }
    if !gateway.has_credential() {
        return Err(AppError::MissingCredential);
    }

    let translation = gateway
        .invoke(&translation_prompt(&draft), &[], None)
        .await
        .trim()
        .to_string();
    if is_gateway_error(&translation) {
        warn!("Translation of {module} failed; storing the error text");
    }

    store.store_translation(module, translation.clone());
    info!("Translated {module} ({} chars)", translation.chars().count());
    Ok(translation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::tests::{gateway_with, StubBackend};
    use crate::llm_client::Part;

    #[tokio::test]
    async fn test_translation_is_stored_against_current_draft() {
        let backend = StubBackend::replying(&["  **I studied statistics.**  "]);
        let gateway = gateway_with(backend.clone());
        let mut store = SectionStore::new();
        store.record_generation(Module::Academic, "我学习了统计学。".to_string(), None);

        let out = translate_section(&gateway, &mut store, Module::Academic)
            .await
            .unwrap();

        assert_eq!(out, "**I studied statistics.**");
        assert_eq!(
            store.get(Module::Academic).unwrap().translation(),
            Some("**I studied statistics.**")
        );

        let parts = backend.call(0);
        assert_eq!(parts.len(), 1, "no context and no attachments");
        match &parts[0] {
            Part::Text(prompt) => {
                assert!(prompt.starts_with(TRANSLATION_RULES));
                assert!(prompt.ends_with("\n我学习了统计学。"));
            }
            other => panic!("unexpected part {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_edit_after_translation_invalidates_it() {
        let backend = StubBackend::replying(&["**Text.**"]);
        let gateway = gateway_with(backend);
        let mut store = SectionStore::new();
        store.record_generation(Module::CareerGoal, "原文".to_string(), None);
        translate_section(&gateway, &mut store, Module::CareerGoal)
            .await
            .unwrap();

        store.replace_draft(Module::CareerGoal, "新的原文".to_string());
        assert_eq!(store.get(Module::CareerGoal).unwrap().translation(), None);
    }

    #[tokio::test]
    async fn test_absent_or_empty_draft_is_rejected() {
        let backend = StubBackend::replying(&[]);
        let gateway = gateway_with(backend.clone());
        let mut store = SectionStore::new();

        let err = translate_section(&gateway, &mut store, Module::WhySchool)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        store.record_generation(Module::WhySchool, "   ".to_string(), None);
        let err = translate_section(&gateway, &mut store, Module::WhySchool)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(backend.call_count(), 0);
    }
}
