//! Typed view of the motivation module's two-segment response.

use crate::generation::prompts::{DRAFT_END, DRAFT_START, TRENDS_END, TRENDS_START};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MotivationResponse {
    /// Both delimiter pairs were found, in order.
    Structured { research_note: String, draft: String },
    /// Anything else: the whole trimmed response is the draft.
    Raw(String),
}

impl MotivationResponse {
    /// Parses raw model output. Never fails; malformed output falls back to `Raw`.
    pub fn parse(raw: &str) -> Self {
        match split_segments(raw) {
            Some((note, draft)) => MotivationResponse::Structured {
                research_note: note.trim().to_string(),
                draft: draft.trim().to_string(),
            },
            None => MotivationResponse::Raw(raw.trim().to_string()),
        }
    }

    pub fn into_parts(self) -> (String, Option<String>) {
        match self {
            MotivationResponse::Structured {
                research_note,
                draft,
            } => (draft, Some(research_note)),
            MotivationResponse::Raw(draft) => (draft, None),
        }
    }
}

/// Returns the text between the first trends pair and the draft pair after it.
fn split_segments(raw: &str) -> Option<(&str, &str)> {
    let (note, rest) = between(raw, TRENDS_START, TRENDS_END)?;
    let (draft, _) = between(rest, DRAFT_START, DRAFT_END)?;
    Some((note, draft))
}

/// Finds `open … close` and returns the inner text and the remainder after `close`.
fn between<'a>(text: &'a str, open: &str, close: &str) -> Option<(&'a str, &'a str)> {
    let start = text.find(open)? + open.len();
    let len = text[start..].find(close)?;
    let inner = &text[start..start + len];
    let rest = &text[start + len + close.len()..];
    Some((inner, rest))
}
