//! In-memory question-builder state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use dmp_model::{
    AdditionalField, DefaultOutputType, ResearchOutputTableQuestion, StandardField,
    StandardFieldId,
};
use dmp_standards::StandardsRegistry;

use crate::engine::SchemaMapper;
use crate::error::MappingError;
use crate::utils::{slugify_id, unreserved_heading};

/// Sections expanded when a question has nothing to hydrate from.
pub const DEFAULT_EXPANDED_FIELDS: [&str; 2] = ["title", "outputType"];
const FALLBACK_ADDITIONAL_ID: &str = "custom_field";

pub(crate) fn default_expanded_fields() -> Vec<String> {
    DEFAULT_EXPANDED_FIELDS.map(String::from).to_vec()
}

/// Everything the editor tracks for one research output table question.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    #[serde(default)]
    pub standard_fields: Vec<StandardField>,
    #[serde(default)]
    pub additional_fields: Vec<AdditionalField>,
    #[serde(default)]
    pub expanded_fields: Vec<String>,
}

/// Counts shown in the editor sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSummary {
    pub enabled_standard: usize,
    pub enabled_additional: usize,
    pub required: usize,
}

impl EditorState {
    pub fn new(standard_fields: Vec<StandardField>) -> Self {
        Self {
            standard_fields,
            additional_fields: Vec::new(),
            expanded_fields: default_expanded_fields(),
        }
    }

    /// Fresh state seeded with the registry's initial standard fields.
    pub fn from_registry(registry: &StandardsRegistry) -> Self {
        Self::new(registry.standard_fields.clone())
    }

    pub fn standard_field(&self, id: StandardFieldId) -> Option<&StandardField> {
        self.standard_fields.iter().find(|f| f.id() == id)
    }

    pub fn standard_field_mut(&mut self, id: StandardFieldId) -> Option<&mut StandardField> {
        self.standard_fields.iter_mut().find(|f| f.id() == id)
    }

    /// Returns false when the field is not part of this state.
    pub fn set_enabled(&mut self, id: StandardFieldId, enabled: bool) -> bool {
        match self.standard_field_mut(id) {
            Some(field) => {
                field.enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// Add an enabled additional field labelled `label` and return its id.
    ///
    /// Ids are slugs of the label, suffixed `_2`, `_3`, ... when taken. A
    /// label matching a standard heading is suffixed first, see
    /// [`unreserved_heading`].
    pub fn add_additional_field(&mut self, label: &str) -> String {
        let label = unreserved_heading(label.trim());
        let mut base = slugify_id(&label);
        if base.is_empty() {
            base = FALLBACK_ADDITIONAL_ID.to_string();
        }
        let mut id = base.clone();
        let mut suffix = 2;
        while self.additional_fields.iter().any(|f| f.id == id) {
            id = format!("{base}_{suffix}");
            suffix += 1;
        }
        debug!(id = %id, "added additional field");
        self.additional_fields.push(AdditionalField {
            id: id.clone(),
            label: label.clone(),
            enabled: true,
            custom_label: label,
            ..AdditionalField::default()
        });
        id
    }

    pub fn remove_additional_field(&mut self, id: &str) -> Option<AdditionalField> {
        let index = self.additional_fields.iter().position(|f| f.id == id)?;
        Some(self.additional_fields.remove(index))
    }

    /// Flip a section between expanded and collapsed; returns the new state.
    pub fn toggle_expanded(&mut self, key: &str) -> bool {
        if let Some(index) = self.expanded_fields.iter().position(|k| k == key) {
            self.expanded_fields.remove(index);
            false
        } else {
            self.expanded_fields.push(key.to_string());
            true
        }
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded_fields.iter().any(|k| k == key)
    }

    pub fn summary(&self) -> EditorSummary {
        EditorSummary {
            enabled_standard: self.standard_fields.iter().filter(|f| f.enabled).count(),
            enabled_additional: self.additional_fields.iter().filter(|f| f.enabled).count(),
            required: self
                .standard_fields
                .iter()
                .filter(|f| f.enabled && f.required)
                .count(),
        }
    }

    /// Build the persisted question for this state.
    pub fn to_question(
        &self,
        mapper: &SchemaMapper,
        default_output_types: Option<&[DefaultOutputType]>,
    ) -> Result<ResearchOutputTableQuestion, MappingError> {
        mapper.state_to_json(
            &self.standard_fields,
            &self.additional_fields,
            default_output_types,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn additional_ids_never_collide() {
        let mut state = EditorState::default();
        assert_eq!(state.add_additional_field("Funding Source"), "funding_source");
        assert_eq!(state.add_additional_field("funding  source"), "funding_source_2");
        assert_eq!(state.add_additional_field("Funding Source"), "funding_source_3");
        assert_eq!(state.add_additional_field("   "), "custom_field");
        assert_eq!(state.additional_fields.len(), 4);
    }

    #[test]
    fn standard_headings_are_not_reused() {
        let mut state = EditorState::default();
        assert_eq!(state.add_additional_field("Title"), "title_(custom)");
        assert_eq!(state.additional_fields[0].label, "Title (custom)");
        assert_eq!(state.additional_fields[0].custom_label, "Title (custom)");
    }

    #[test]
    fn removed_id_can_be_reused() {
        let mut state = EditorState::default();
        let id = state.add_additional_field("Notes");
        assert!(state.remove_additional_field(&id).is_some());
        assert!(state.remove_additional_field(&id).is_none());
        assert_eq!(state.add_additional_field("Notes"), "notes");
    }

    #[test]
    fn toggle_expanded_flips() {
        let mut state = EditorState::new(Vec::new());
        assert!(state.is_expanded("title"));
        assert!(!state.toggle_expanded("title"));
        assert!(!state.is_expanded("title"));
        assert!(state.toggle_expanded("licenses"));
        assert!(state.is_expanded("licenses"));
    }

    #[test]
    fn summary_counts_enabled_fields() {
        let mut state = EditorState::new(vec![
            StandardField::new(StandardFieldId::Title, "Title")
                .enabled(true)
                .required(true),
            StandardField::new(StandardFieldId::Description, "Description").required(true),
            StandardField::new(StandardFieldId::OutputType, "Output Type").enabled(true),
        ]);
        state.add_additional_field("Notes");
        assert_eq!(
            state.summary(),
            EditorSummary {
                enabled_standard: 2,
                enabled_additional: 1,
                required: 1,
            }
        );
        assert!(state.set_enabled(StandardFieldId::Description, true));
        assert!(!state.set_enabled(StandardFieldId::Licenses, true));
        assert_eq!(state.summary().required, 2);
    }
}
