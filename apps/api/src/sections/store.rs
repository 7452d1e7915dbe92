//! Section Store — the session's drafts, one record per module.
//!
//! CRITICAL: every path that changes a draft goes through this type, and every
//! draft change drops the stored translation. Callers cannot reach the fields.

use std::collections::BTreeMap;

use crate::models::module::Module;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    draft_text: String,
    research_note: Option<String>,
    translation: Option<String>,
}

impl Section {
    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    /// Only ever set for the motivation module.
    pub fn research_note(&self) -> Option<&str> {
        self.research_note.as_deref()
    }

    pub fn translation(&self) -> Option<&str> {
        self.translation.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SectionStore {
    sections: BTreeMap<Module, Section>,
}

impl SectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the module's section with a freshly generated draft.
    ///
    /// The research note is replaced too: a regeneration without one clears it.
    pub fn record_generation(&mut self, module: Module, draft: String, research_note: Option<String>) {
        let research_note = research_note.filter(|_| module == Module::Motivation);
        self.sections.insert(
            module,
            Section {
                draft_text: draft,
                research_note,
                translation: None,
            },
        );
    }

    /// Stores a model revision. The translation is always dropped, even when
    /// the model echoed the draft back unchanged.
    ///
    /// Returns `false` if the module was never generated.
    pub fn apply_revision(&mut self, module: Module, text: String) -> bool {
        let Some(section) = self.sections.get_mut(&module) else {
            return false;
        };
        section.draft_text = text;
        section.translation = None;
        true
    }

    /// Direct edit of an existing section's draft.
    ///
    /// Returns `false` if the module was never generated. The translation is
    /// dropped whenever the text actually changes, so re-submitting the same
    /// text is a no-op.
    pub fn replace_draft(&mut self, module: Module, text: String) -> bool {
        let Some(section) = self.sections.get_mut(&module) else {
            return false;
        };
        if section.draft_text != text {
            section.draft_text = text;
            section.translation = None;
        }
        true
    }

    /// Stores a translation of the current draft. Returns `false` if absent.
    pub fn store_translation(&mut self, module: Module, translation: String) -> bool {
        match self.sections.get_mut(&module) {
            Some(section) => {
                section.translation = Some(translation);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, module: Module) -> Option<&Section> {
        self.sections.get(&module)
    }

    /// Sections in fixed display order.
    pub fn sections(&self) -> impl Iterator<Item = (Module, &Section)> {
        self.sections.iter().map(|(m, s)| (*m, s))
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translated_store(module: Module) -> SectionStore {
        let mut store = SectionStore::new();
        store.record_generation(module, "初稿".to_string(), None);
        assert!(store.store_translation(module, "**Draft.**".to_string()));
        store
    }

    #[test]
    fn test_direct_edit_clears_translation_for_every_module() {
        for module in Module::ALL {
            let mut store = translated_store(module);
            assert!(store.replace_draft(module, "修改后的段落".to_string()));
            let section = store.get(module).unwrap();
            assert_eq!(section.draft_text(), "修改后的段落");
            assert_eq!(section.translation(), None);
        }
    }

    #[test]
    fn test_identical_edit_keeps_translation() {
        let mut store = translated_store(Module::Academic);
        assert!(store.replace_draft(Module::Academic, "初稿".to_string()));
        assert_eq!(
            store.get(Module::Academic).unwrap().translation(),
            Some("**Draft.**")
        );
    }

    #[test]
    fn test_revision_always_clears_translation() {
        let mut store = translated_store(Module::WhySchool);
        assert!(store.apply_revision(Module::WhySchool, "初稿".to_string()));
        assert_eq!(store.get(Module::WhySchool).unwrap().translation(), None);
    }

    #[test]
    fn test_regeneration_clears_translation_and_note() {
        let mut store = SectionStore::new();
        store.record_generation(
            Module::Motivation,
            "v1".to_string(),
            Some("趋势".to_string()),
        );
        store.store_translation(Module::Motivation, "v1 en".to_string());

        store.record_generation(Module::Motivation, "v2".to_string(), None);
        let section = store.get(Module::Motivation).unwrap();
        assert_eq!(section.draft_text(), "v2");
        assert_eq!(section.research_note(), None);
        assert_eq!(section.translation(), None);
    }

    #[test]
    fn test_research_note_only_for_motivation() {
        let mut store = SectionStore::new();
        store.record_generation(Module::CareerGoal, "d".to_string(), Some("n".to_string()));
        assert_eq!(store.get(Module::CareerGoal).unwrap().research_note(), None);
    }

    #[test]
    fn test_absent_module_is_reported() {
        let mut store = SectionStore::new();
        assert!(!store.replace_draft(Module::WhySchool, "x".to_string()));
        assert!(!store.apply_revision(Module::WhySchool, "x".to_string()));
        assert!(!store.store_translation(Module::WhySchool, "x".to_string()));
        assert!(store.is_empty());
    }

    #[test]
    fn test_reads_do_not_mutate_and_follow_display_order() {
        let mut store = SectionStore::new();
        for module in [Module::CareerGoal, Module::Motivation, Module::Internship] {
            store.record_generation(module, module.id().to_string(), None);
        }
        let first: Vec<Module> = store.sections().map(|(m, _)| m).collect();
        let second: Vec<Module> = store.sections().map(|(m, _)| m).collect();
        assert_eq!(first, vec![Module::Motivation, Module::Internship, Module::CareerGoal]);
        assert_eq!(first, second);
    }
}
