//! Prompt Builder — pure template substitution per module.

use crate::generation::prompts::{
    ACADEMIC_PROMPT_TEMPLATE, CAREER_GOAL_PROMPT_TEMPLATE, CURRICULUM_BLOCK_TEMPLATE,
    INTERNSHIP_PROMPT_TEMPLATE, MOTIVATION_PROMPT_TEMPLATE, STRATEGY_BLOCK_TEMPLATE,
    WHY_SCHOOL_PROMPT_TEMPLATE,
};
use crate::llm_client::prompts::{fill_template, CLEAN_OUTPUT_RULES};
use crate::models::inputs::{Attachment, InputBundle};
use crate::models::module::Module;

/// A complete instruction for one module plus the media it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSpec {
    pub text: String,
    pub attachments: Vec<Attachment>,
}

/// Builds the drafting prompt for `module`. Identical inputs give identical output.
///
/// Attachments: academic gets the transcript, why-school gets the curriculum
/// images, every other module gets none.
pub fn build_prompt(module: Module, bundle: &InputBundle) -> PromptSpec {
    let template = match module {
        Module::Motivation => MOTIVATION_PROMPT_TEMPLATE,
        Module::Academic => ACADEMIC_PROMPT_TEMPLATE,
        Module::Internship => INTERNSHIP_PROMPT_TEMPLATE,
        Module::WhySchool => WHY_SCHOOL_PROMPT_TEMPLATE,
        Module::CareerGoal => CAREER_GOAL_PROMPT_TEMPLATE,
    };

    let attachments = match module {
        Module::Academic => bundle.transcript.iter().cloned().collect(),
        Module::WhySchool => bundle.curriculum_images.clone(),
        _ => Vec::new(),
    };

    let curriculum = curriculum_block(bundle);
    let strategy = strategy_block(bundle);
    let text = fill_template(
        template,
        &[
            ("clean_output_rules", CLEAN_OUTPUT_RULES),
            ("curriculum_block", curriculum.as_str()),
            ("strategy_block", strategy.as_str()),
            ("target_program", bundle.target_program.trim()),
        ],
    );

    PromptSpec { text, attachments }
}

fn strategy_block(bundle: &InputBundle) -> String {
    let strategy = bundle.advisor_strategy.trim();
    if strategy.is_empty() {
        String::new()
    } else {
        fill_template(STRATEGY_BLOCK_TEMPLATE, &[("strategy", strategy)])
    }
}

fn curriculum_block(bundle: &InputBundle) -> String {
    let curriculum = bundle.curriculum_text.trim();
    if curriculum.is_empty() {
        String::new()
    } else {
        fill_template(CURRICULUM_BLOCK_TEMPLATE, &[("curriculum", curriculum)])
    }
}
