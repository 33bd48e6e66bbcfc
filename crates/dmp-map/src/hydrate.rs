//! Reconstruction of editor state from a persisted question.
//!
//! Hydration is best effort: columns that cannot be understood leave the
//! template field untouched, and unknown headings become additional fields.

use tracing::{debug, warn};

use dmp_model::{
    AdditionalField, AnyParsedQuestion, ColumnContent, CustomAccessLevel, CustomOutputType,
    FieldConfig, LicensesMode, ResearchOutputColumn, SelectOption, SelectionMode, StandardField,
    StandardFieldId, is_standard_heading, resolve_heading, standard_field_for_heading,
};

use crate::engine::SchemaMapper;
use crate::merge::entries_from;
use crate::state::{EditorState, default_expanded_fields};
use crate::utils::slugify_id;

impl SchemaMapper {
    /// Rebuild editor state from a persisted question.
    ///
    /// `initial_standard_fields` is the template each standard field is
    /// hydrated onto. When `parsed` is absent or not a research output table,
    /// the template is returned as-is with no additional fields and the
    /// default expanded sections.
    pub fn json_to_state(
        &self,
        parsed: Option<&AnyParsedQuestion>,
        initial_standard_fields: &[StandardField],
    ) -> EditorState {
        let Some(question) = parsed.and_then(AnyParsedQuestion::as_research_output_table) else {
            debug!("no research output table to hydrate; using initial fields");
            return EditorState {
                standard_fields: initial_standard_fields.to_vec(),
                additional_fields: Vec::new(),
                expanded_fields: default_expanded_fields(),
            };
        };

        for id in StandardFieldId::ALL {
            let matches = question
                .columns
                .iter()
                .filter(|c| standard_field_for_heading(&c.heading) == Some(id))
                .count();
            if matches > 1 {
                warn!(field = %id, matches, "duplicate columns for field; using the first");
            }
        }

        let standard_fields = initial_standard_fields
            .iter()
            .map(|field| match question.column_for(field.id()) {
                Some(column) => self.hydrate_field(field, column),
                None => field.clone(),
            })
            .collect();

        let additional_fields: Vec<AdditionalField> = question
            .columns
            .iter()
            .filter(|c| !is_standard_heading(&c.heading))
            .map(additional_field_from)
            .collect();

        debug!(
            columns = question.columns.len(),
            additional = additional_fields.len(),
            "hydrated editor state"
        );

        EditorState {
            standard_fields,
            additional_fields,
            expanded_fields: expanded_fields_for(&question.columns),
        }
    }

    fn hydrate_field(
        &self,
        template: &StandardField,
        column: &ResearchOutputColumn,
    ) -> StandardField {
        let attributes = column.content.attributes();
        let mut field = template.clone();
        field.enabled = column.enabled;
        field.required = column.required;
        if let Some(help) = column
            .help
            .clone()
            .or_else(|| attributes.and_then(|a| a.help.clone()))
        {
            field.help_text = help;
        }
        if let Some(label) = attributes
            .and_then(|a| a.label.clone())
            .filter(|l| !l.trim().is_empty())
        {
            field.label = label;
        }
        if column.language_translation_key.is_some() {
            field.language_translation_key = column.language_translation_key.clone();
        }
        field.config = self.hydrate_config(template.config.clone(), &column.content);
        field
    }

    fn hydrate_config(&self, config: FieldConfig, content: &ColumnContent) -> FieldConfig {
        let max_length = content
            .attributes()
            .and_then(|a| a.max_length)
            .map(|n| n.to_string());

        match config {
            FieldConfig::Title {
                max_length: existing,
            } => FieldConfig::Title {
                max_length: max_length.or(existing),
            },
            FieldConfig::Description {
                max_length: existing,
            } => FieldConfig::Description {
                max_length: max_length.or(existing),
            },
            FieldConfig::OutputType {
                mut output_type_config,
            } => {
                let options = content.select_options().unwrap_or_default();
                if !options.is_empty() {
                    if self.all_default_options(StandardFieldId::OutputType, options) {
                        output_type_config.mode = SelectionMode::Defaults;
                        output_type_config.selected_defaults = labels(options);
                    } else {
                        output_type_config.mode = SelectionMode::Mine;
                        output_type_config.custom_types = options
                            .iter()
                            .map(|o| CustomOutputType {
                                name: o.label.clone(),
                                description: None,
                            })
                            .collect();
                    }
                }
                FieldConfig::OutputType { output_type_config }
            }
            FieldConfig::DataFlags { content: existing } => match content {
                ColumnContent::CheckBoxes(_) => FieldConfig::DataFlags {
                    content: Some(content.clone()),
                },
                _ => FieldConfig::DataFlags { content: existing },
            },
            FieldConfig::RepoSelector { mut repo_config } => {
                let preferences = content.preferences().unwrap_or_default();
                if !preferences.is_empty() {
                    repo_config.has_custom_repos = true;
                    repo_config.custom_repos = entries_from(preferences);
                }
                FieldConfig::RepoSelector { repo_config }
            }
            FieldConfig::MetadataStandards {
                mut meta_data_config,
            } => {
                let preferences = content.preferences().unwrap_or_default();
                if !preferences.is_empty() {
                    meta_data_config.has_custom_standards = true;
                    meta_data_config.custom_standards = entries_from(preferences);
                }
                FieldConfig::MetadataStandards { meta_data_config }
            }
            FieldConfig::Licenses {
                mut licenses_config,
            } => {
                let preferences = content.preferences().unwrap_or_default();
                if !preferences.is_empty() {
                    licenses_config.mode = LicensesMode::AddToDefaults;
                    licenses_config.custom_types = entries_from(preferences);
                }
                FieldConfig::Licenses { licenses_config }
            }
            FieldConfig::AccessLevels {
                mut access_levels_config,
            } => {
                let options = content.select_options().unwrap_or_default();
                if !options.is_empty() {
                    if self.all_default_options(StandardFieldId::AccessLevels, options) {
                        access_levels_config.mode = SelectionMode::Defaults;
                        access_levels_config.selected_defaults = labels(options);
                    } else {
                        access_levels_config.mode = SelectionMode::Mine;
                        access_levels_config.custom_levels = options
                            .iter()
                            .map(|o| CustomAccessLevel {
                                label: o.label.clone(),
                                value: o.value.clone(),
                                description: None,
                            })
                            .collect();
                    }
                }
                FieldConfig::AccessLevels {
                    access_levels_config,
                }
            }
        }
    }

    /// True when every option label is one of the template's default options.
    fn all_default_options(&self, id: StandardFieldId, options: &[SelectOption]) -> bool {
        let defaults = self
            .template
            .column_for(id)
            .and_then(|c| c.content.select_options())
            .unwrap_or_default();
        options.iter().all(|option| {
            defaults
                .iter()
                .any(|d| d.label.trim().eq_ignore_ascii_case(option.label.trim()))
        })
    }
}

fn labels(options: &[SelectOption]) -> Vec<String> {
    options.iter().map(|o| o.label.clone()).collect()
}

fn additional_field_from(column: &ResearchOutputColumn) -> AdditionalField {
    let attributes = column.content.attributes();
    AdditionalField {
        id: slugify_id(&column.heading),
        label: column.heading.clone(),
        enabled: column.enabled,
        default_value: attributes
            .and_then(|a| a.default_value.clone())
            .unwrap_or_default(),
        custom_label: column.heading.clone(),
        help_text: column
            .help
            .clone()
            .or_else(|| attributes.and_then(|a| a.help.clone()))
            .unwrap_or_default(),
        max_length: attributes
            .and_then(|a| a.max_length)
            .map(|n| n.to_string())
            .unwrap_or_default(),
    }
}

/// Editor sections to pre-expand: one per enabled column, in column order.
fn expanded_fields_for(columns: &[ResearchOutputColumn]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for column in columns.iter().filter(|c| c.enabled) {
        let key = match resolve_heading(&column.heading) {
            Some(kind) => kind.section_key().to_string(),
            None => slugify_id(&column.heading),
        };
        if !keys.contains(&key) {
            keys.push(key);
        }
    }
    keys
}
