//! Serialization of editor state into the persisted question schema.

use tracing::{debug, trace, warn};

use dmp_model::{
    AccessLevelsConfig, AdditionalField, ColumnContent, ContentAttributes, DefaultOutputType,
    FieldConfig, FieldContent, LicensesConfig, LicensesMode, MetaDataConfig, OutputTypeConfig,
    RepoConfig, ResearchOutputColumn, ResearchOutputTableQuestion, ResearchOutputTableType,
    SchemaMeta, SelectionMode, StandardField, StandardFieldId, TableAttributes,
};
use dmp_standards::StandardsRegistry;

use crate::error::MappingError;
use crate::merge::{
    field_content, merge_attributes, merge_column, preferences_from, search_content,
    select_content, template_option_value, unselected,
};
use crate::utils::{parse_max_length, slugify_value, unreserved_heading};

/// Title length limit used when neither the field nor the template sets one.
pub const DEFAULT_TITLE_MAX_LENGTH: u32 = 500;
const DEFAULT_INITIAL_ROWS: u32 = 1;

/// Converts between question-builder state and the persisted schema,
/// using a default question as the template for every standard column.
#[derive(Debug, Clone)]
pub struct SchemaMapper {
    pub(crate) template: ResearchOutputTableQuestion,
}

impl SchemaMapper {
    pub fn new(template: ResearchOutputTableQuestion) -> Self {
        Self { template }
    }

    pub fn from_registry(registry: &StandardsRegistry) -> Self {
        Self::new(registry.template.clone())
    }

    /// Mapper over the standards selected by `DMP_STANDARDS_DIR` or the embedded defaults.
    pub fn with_default_template() -> Result<Self, MappingError> {
        Ok(Self::from_registry(&StandardsRegistry::load()?))
    }

    pub fn template(&self) -> &ResearchOutputTableQuestion {
        &self.template
    }

    /// Build the persisted question for the given editor state.
    ///
    /// One column is emitted per enabled standard field, in input order,
    /// followed by one `text` column per enabled additional field.
    /// `default_output_types` maps default output-type names to the values
    /// the backend stores for them.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::MissingTemplateColumn`] when an enabled field
    /// has no column in the template.
    pub fn state_to_json(
        &self,
        standard_fields: &[StandardField],
        additional_fields: &[AdditionalField],
        default_output_types: Option<&[DefaultOutputType]>,
    ) -> Result<ResearchOutputTableQuestion, MappingError> {
        let mut columns = Vec::with_capacity(standard_fields.len() + additional_fields.len());

        for field in standard_fields.iter().filter(|f| f.enabled) {
            let column = self.standard_column(field, default_output_types)?;
            trace!(field = %field.id(), heading = %column.heading, "emitted standard column");
            columns.push(column);
        }

        for field in additional_fields.iter().filter(|f| f.enabled) {
            let column = additional_column(field);
            trace!(id = %field.id, heading = %column.heading, "emitted additional column");
            columns.push(column);
        }

        debug!(columns = columns.len(), "built research output table question");

        let mut meta = self.template.meta.clone();
        if meta.schema_version.trim().is_empty() {
            meta = SchemaMeta::default();
        }

        Ok(ResearchOutputTableQuestion {
            question_type: ResearchOutputTableType::ResearchOutputTable,
            meta,
            attributes: table_attributes(&self.template.attributes),
            columns,
        })
    }

    fn template_column(&self, id: StandardFieldId) -> Result<&ResearchOutputColumn, MappingError> {
        self.template
            .column_for(id)
            .ok_or(MappingError::MissingTemplateColumn { field: id })
    }

    fn standard_column(
        &self,
        field: &StandardField,
        default_output_types: Option<&[DefaultOutputType]>,
    ) -> Result<ResearchOutputColumn, MappingError> {
        let template = self.template_column(field.id())?;
        let content = match &field.config {
            FieldConfig::Title { max_length } => {
                title_content(template, field, max_length.as_deref())
            }
            FieldConfig::Description { max_length } => {
                description_content(template, field, max_length.as_deref())
            }
            FieldConfig::OutputType { output_type_config } => {
                output_type_content(template, field, output_type_config, default_output_types)
            }
            FieldConfig::DataFlags { content } => content
                .clone()
                .unwrap_or_else(|| template.content.clone()),
            FieldConfig::RepoSelector { repo_config } => {
                repositories_content(template, field, repo_config)
            }
            FieldConfig::MetadataStandards { meta_data_config } => {
                metadata_standards_content(template, field, meta_data_config)
            }
            FieldConfig::Licenses { licenses_config } => {
                licenses_content(template, field, licenses_config)
            }
            FieldConfig::AccessLevels {
                access_levels_config,
            } => access_levels_content(template, field, access_levels_config),
        };
        Ok(merge_column(template, field, content))
    }
}

fn title_content(
    template: &ResearchOutputColumn,
    field: &StandardField,
    max_length: Option<&str>,
) -> ColumnContent {
    let mut content = field_content(&template.content);
    content.attributes = merge_attributes(&content.attributes, field);
    content.attributes.max_length = parse_max_length(max_length)
        .or(content.attributes.max_length)
        .or(Some(DEFAULT_TITLE_MAX_LENGTH));
    ColumnContent::Text(content)
}

fn description_content(
    template: &ResearchOutputColumn,
    field: &StandardField,
    max_length: Option<&str>,
) -> ColumnContent {
    let mut content = field_content(&template.content);
    content.attributes = merge_attributes(&content.attributes, field);
    content.attributes.max_length =
        parse_max_length(max_length).or(content.attributes.max_length);
    match template.content {
        ColumnContent::Text(_) => ColumnContent::Text(content),
        _ => ColumnContent::TextArea(content),
    }
}

fn output_type_content(
    template: &ResearchOutputColumn,
    field: &StandardField,
    config: &OutputTypeConfig,
    default_output_types: Option<&[DefaultOutputType]>,
) -> ColumnContent {
    let mut content = select_content(&template.content);
    content.attributes = merge_attributes(&content.attributes, field);
    content.options = match config.mode {
        SelectionMode::Defaults => config
            .selected_defaults
            .iter()
            .map(|name| unselected(name, output_type_value(name, default_output_types)))
            .collect(),
        SelectionMode::Mine => config
            .custom_types
            .iter()
            .map(|custom| unselected(&custom.name, slugify_value(&custom.name)))
            .collect(),
    };
    ColumnContent::SelectBox(content)
}

/// Backend value of a default output type, or its slug when the catalog
/// does not list it.
fn output_type_value(name: &str, default_output_types: Option<&[DefaultOutputType]>) -> String {
    let known = default_output_types.and_then(|types| {
        types
            .iter()
            .find(|t| t.name.trim().eq_ignore_ascii_case(name.trim()))
    });
    match known {
        Some(output_type) => output_type.value.clone(),
        None => {
            debug!(name, "output type not in catalog; using slug");
            slugify_value(name)
        }
    }
}

fn repositories_content(
    template: &ResearchOutputColumn,
    field: &StandardField,
    config: &RepoConfig,
) -> ColumnContent {
    let mut content = search_content(&template.content);
    content.attributes = merge_attributes(&content.attributes, field);
    content.preferences =
        (!config.custom_repos.is_empty()).then(|| preferences_from(&config.custom_repos));
    ColumnContent::RepositorySearch(content)
}

fn metadata_standards_content(
    template: &ResearchOutputColumn,
    field: &StandardField,
    config: &MetaDataConfig,
) -> ColumnContent {
    let mut content = search_content(&template.content);
    content.attributes = merge_attributes(&content.attributes, field);
    content.preferences = (!config.custom_standards.is_empty())
        .then(|| preferences_from(&config.custom_standards));
    ColumnContent::MetadataStandardSearch(content)
}

// Unlike repositories and metadata standards, licenses always write the
// preferences list, empty unless custom licenses are added to the defaults.
fn licenses_content(
    template: &ResearchOutputColumn,
    field: &StandardField,
    config: &LicensesConfig,
) -> ColumnContent {
    let mut content = search_content(&template.content);
    content.attributes = merge_attributes(&content.attributes, field);
    let preferences = match config.mode {
        LicensesMode::AddToDefaults => preferences_from(&config.custom_types),
        LicensesMode::Defaults => Vec::new(),
    };
    content.preferences = Some(preferences);
    ColumnContent::LicenseSearch(content)
}

fn access_levels_content(
    template: &ResearchOutputColumn,
    field: &StandardField,
    config: &AccessLevelsConfig,
) -> ColumnContent {
    let mut content = select_content(&template.content);
    content.attributes = merge_attributes(&content.attributes, field);
    let template_options = std::mem::take(&mut content.options);
    content.options = match config.mode {
        SelectionMode::Defaults => config
            .selected_defaults
            .iter()
            .map(|label| {
                let value = template_option_value(&template_options, label)
                    .map(str::to_string)
                    .unwrap_or_else(|| slugify_value(label));
                unselected(label, value)
            })
            .collect(),
        SelectionMode::Mine => config
            .custom_levels
            .iter()
            .map(|level| {
                let value = if level.value.trim().is_empty() {
                    slugify_value(&level.label)
                } else {
                    level.value.clone()
                };
                unselected(&level.label, value)
            })
            .collect(),
    };
    ColumnContent::SelectBox(content)
}

fn additional_column(field: &AdditionalField) -> ResearchOutputColumn {
    let label = unreserved_heading(field.display_label());
    if label != field.display_label() {
        warn!(id = %field.id, heading = %label, "custom label matches a standard heading");
    }
    let attributes = ContentAttributes {
        label: Some(label.clone()),
        help: Some(field.help_text.clone()),
        max_length: parse_max_length(Some(&field.max_length)),
        default_value: Some(field.default_value.clone()).filter(|v| !v.is_empty()),
        ..ContentAttributes::default()
    };
    ResearchOutputColumn {
        heading: label,
        required: false,
        enabled: true,
        help: Some(field.help_text.clone()),
        language_translation_key: None,
        content: ColumnContent::Text(FieldContent {
            meta: SchemaMeta::default(),
            attributes,
        }),
    }
}

fn table_attributes(template: &TableAttributes) -> TableAttributes {
    TableAttributes {
        label: Some(template.label.clone().unwrap_or_default()),
        help: Some(template.help.clone().unwrap_or_default()),
        can_add_rows: Some(template.can_add_rows.unwrap_or(true)),
        can_remove_rows: Some(template.can_remove_rows.unwrap_or(true)),
        initial_rows: Some(template.initial_rows.unwrap_or(DEFAULT_INITIAL_ROWS)),
        max_rows: template.max_rows,
        min_rows: template.min_rows,
    }
}
