//! Revision Loop — model-assisted rewrites of an existing draft.
//!
//! Whole-draft revision applies free-text feedback to the paragraph.
//! Targeted revision asks the model to change one verbatim span and return
//! the full paragraph; the span is not located locally, so a span missing
//! from the draft still costs exactly one model call.

use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, CLEAN_OUTPUT_RULES};
use crate::llm_client::{is_gateway_error, ModelGateway};
use crate::models::module::Module;
use crate::sections::prompts::{REVISE_PROMPT_TEMPLATE, TARGETED_REVISE_PROMPT_TEMPLATE};
use crate::sections::store::SectionStore;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum FeedbackRequest {
    Whole { feedback: String },
    Targeted { span: String, instruction: String },
}

impl FeedbackRequest {
    /// Rejects requests with nothing to act on.
    pub fn validate(&self) -> Result<(), AppError> {
        match self {
            FeedbackRequest::Whole { feedback } if feedback.trim().is_empty() => Err(
                AppError::Validation("Feedback text cannot be empty".to_string()),
            ),
            FeedbackRequest::Targeted { span, .. } if span.trim().is_empty() => Err(
                AppError::Validation("The text span to revise cannot be empty".to_string()),
            ),
            FeedbackRequest::Targeted { instruction, .. } if instruction.trim().is_empty() => {
                Err(AppError::Validation(
                    "The revision instruction cannot be empty".to_string(),
                ))
            }
            _ => Ok(()),
        }
    }

    /// Builds the revision prompt against the current draft.
    pub fn prompt(&self, draft: &str) -> String {
        match self {
            FeedbackRequest::Whole { feedback } => fill_template(
                REVISE_PROMPT_TEMPLATE,
                &[
                    ("clean_output_rules", CLEAN_OUTPUT_RULES),
                    ("feedback", feedback.trim()),
                    ("draft", draft),
                ],
            ),
            FeedbackRequest::Targeted { span, instruction } => fill_template(
                TARGETED_REVISE_PROMPT_TEMPLATE,
                &[
                    ("clean_output_rules", CLEAN_OUTPUT_RULES),
                    ("instruction", instruction.trim()),
                    ("span", span.as_str()),
                    ("draft", draft),
                ],
            ),
        }
    }
}

/// Rewrites the module's draft according to `request` and returns the new text.
///
/// On return the draft is replaced and any translation is gone.
pub async fn revise_section(
    gateway: &ModelGateway,
    store: &mut SectionStore,
    module: Module,
    request: &FeedbackRequest,
) -> Result<String, AppError> {
    request.validate()?;

    let draft = store
        .get(module)
        .map(|s| s.draft_text().to_string())
        .ok_or_else(|| AppError::NotFound(format!("No draft for module '{module}' yet")))?;

    if !gateway.has_credential() {
        return Err(AppError::MissingCredential);
    }

    let revised = gateway.invoke(&request.prompt(&draft), &[], None).await;
    let revised = revised.trim().to_string();
    if is_gateway_error(&revised) {
        warn!("Revision of {module} failed; storing the error text as the draft");
    }

    store.apply_revision(module, revised.clone());
    info!("Revised {module} ({} chars)", revised.chars().count());
    Ok(revised)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::tests::{gateway_with, settings, StubBackend};
    use crate::llm_client::Part;

    fn store_with(module: Module, draft: &str) -> SectionStore {
        let mut store = SectionStore::new();
        store.record_generation(module, draft.to_string(), None);
        store.store_translation(module, "**Old translation.**".to_string());
        store
    }

    fn prompt_of(backend: &StubBackend) -> String {
        match &backend.call(0)[0] {
            Part::Text(t) => t.clone(),
            other => panic!("unexpected part {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_feedback_rejected_for_every_module() {
        for module in Module::ALL {
            let backend = StubBackend::replying(&["never"]);
            let gateway = gateway_with(backend.clone());
            let mut store = store_with(module, "原段落");

            let err = revise_section(
                &gateway,
                &mut store,
                module,
                &FeedbackRequest::Whole {
                    feedback: "  ".to_string(),
                },
            )
            .await
            .unwrap_err();

            assert!(matches!(err, AppError::Validation(_)));
            assert_eq!(backend.call_count(), 0);
            assert_eq!(store.get(module).unwrap().draft_text(), "原段落");
        }
    }

    #[tokio::test]
    async fn test_whole_revision_replaces_draft_and_clears_translation() {
        let backend = StubBackend::replying(&["\n修改后的段落\n"]);
        let gateway = gateway_with(backend.clone());
        let mut store = store_with(Module::Internship, "原段落");

        let revised = revise_section(
            &gateway,
            &mut store,
            Module::Internship,
            &FeedbackRequest::Whole {
                feedback: "突出领导力".to_string(),
            },
        )
        .await
        .unwrap();

        assert_eq!(revised, "修改后的段落");
        let section = store.get(Module::Internship).unwrap();
        assert_eq!(section.draft_text(), "修改后的段落");
        assert_eq!(section.translation(), None);

        let prompt = prompt_of(&backend);
        assert!(prompt.contains("【原段落】原段落"));
        assert!(prompt.contains("【用户反馈】突出领导力"));
        assert!(prompt.contains(CLEAN_OUTPUT_RULES));
        assert_eq!(backend.call(0).len(), 1);
    }

    #[tokio::test]
    async fn test_targeted_revision_with_absent_span_still_calls_model() {
        let backend = StubBackend::replying(&["模型返回的完整段落"]);
        let gateway = gateway_with(backend.clone());
        let mut store = SectionStore::new();
        store.record_generation(
            Module::Motivation,
            "我在实习中观察到数据孤岛问题。".to_string(),
            Some("趋势".to_string()),
        );

        let request = FeedbackRequest::Targeted {
            span: "这句话并不存在".to_string(),
            instruction: "改得更具体".to_string(),
        };
        revise_section(&gateway, &mut store, Module::Motivation, &request)
            .await
            .unwrap();

        assert_eq!(backend.call_count(), 1);
        let section = store.get(Module::Motivation).unwrap();
        assert_eq!(section.draft_text(), "模型返回的完整段落");
        assert_eq!(section.research_note(), Some("趋势"));

        let prompt = prompt_of(&backend);
        assert!(prompt.contains("【需要修改的片段】这句话并不存在"));
        assert!(prompt.contains("【针对该片段的修改要求】改得更具体"));
        assert!(prompt.contains("【原段落】我在实习中观察到数据孤岛问题。"));
    }

    #[tokio::test]
    async fn test_targeted_revision_requires_span_and_instruction() {
        let missing_span = FeedbackRequest::Targeted {
            span: String::new(),
            instruction: "改".to_string(),
        };
        let missing_instruction = FeedbackRequest::Targeted {
            span: "片段".to_string(),
            instruction: " ".to_string(),
        };
        assert!(missing_span.validate().is_err());
        assert!(missing_instruction.validate().is_err());
    }

    #[tokio::test]
    async fn test_absent_section_is_not_found() {
        let backend = StubBackend::replying(&[]);
        let gateway = gateway_with(backend.clone());
        let mut store = SectionStore::new();

        let err = revise_section(
            &gateway,
            &mut store,
            Module::CareerGoal,
            &FeedbackRequest::Whole {
                feedback: "更具体".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_credential_leaves_draft_untouched() {
        let backend = StubBackend::replying(&[]);
        let gateway = ModelGateway::with_backend(settings(""), backend.clone());
        let mut store = store_with(Module::Academic, "原段落");

        let err = revise_section(
            &gateway,
            &mut store,
            Module::Academic,
            &FeedbackRequest::Whole {
                feedback: "更具体".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::MissingCredential));
        assert_eq!(backend.call_count(), 0);
        assert_eq!(
            store.get(Module::Academic).unwrap().translation(),
            Some("**Old translation.**")
        );
    }

    #[test]
    fn test_feedback_mentioning_draft_placeholder_stays_literal() {
        let prompt = FeedbackRequest::Whole {
            feedback: "不要重复 {draft}".to_string(),
        }
        .prompt("初稿内容");
        assert!(prompt.contains("【用户反馈】不要重复 {draft}"));
        assert_eq!(prompt.matches("初稿内容").count(), 1);
    }

    #[test]
    fn test_feedback_request_wire_format() {
        let whole: FeedbackRequest =
            serde_json::from_str(r#"{"mode":"whole","feedback":"更简洁"}"#).unwrap();
        assert_eq!(
            whole,
            FeedbackRequest::Whole {
                feedback: "更简洁".to_string()
            }
        );
        let targeted: FeedbackRequest = serde_json::from_str(
            r#"{"mode":"targeted","span":"第一句","instruction":"加数据"}"#,
        )
        .unwrap();
        assert!(matches!(targeted, FeedbackRequest::Targeted { .. }));
    }
}
