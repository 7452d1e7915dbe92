//! Exporter — one plain-text document in fixed module order.

use crate::sections::store::SectionStore;

/// Concatenates every drafted module in display order.
///
/// Translated modules export the translation with `*` emphasis markup
/// removed; the rest export the Chinese draft verbatim.
pub fn export_document(store: &SectionStore) -> String {
    let mut out = String::new();
    for (module, section) in store.sections() {
        match section.translation() {
            Some(translation) => {
                out.push_str(&format!("--- {} (English) ---\n", module.label()));
                out.push_str(&strip_emphasis(translation));
            }
            None => {
                out.push_str(&format!("--- {} (中文草稿) ---\n", module.label()));
                out.push_str(section.draft_text());
            }
        }
        out.push_str("\n\n");
    }
    out
}

fn strip_emphasis(text: &str) -> String {
    text.replace('*', "")
}

/// `PS_<target>_<version>.txt`, with characters that break file names replaced.
pub fn export_file_name(target_program: &str, version_tag: &str) -> String {
    let target: String = target_program
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("PS_{target}_{version_tag}.txt")
}
