//! Editable question-builder state.
//!
//! A [`StandardField`] is one of the closed set of well-known research output
//! attributes. Its configuration lives in [`FieldConfig`], a tagged union
//! keyed by the field id, so each field only carries the settings valid for
//! it. [`AdditionalField`] is a user-authored free-text column.

use serde::{Deserialize, Serialize};

use crate::ids::StandardFieldId;
use crate::question::ColumnContent;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardField {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub help_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_translation_key: Option<String>,
    #[serde(flatten)]
    pub config: FieldConfig,
}

impl StandardField {
    /// Create a disabled field with an empty configuration for `id`.
    pub fn new(id: StandardFieldId, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: false,
            required: false,
            help_text: String::new(),
            language_translation_key: None,
            config: FieldConfig::empty(id),
        }
    }

    pub fn id(&self) -> StandardFieldId {
        self.config.id()
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use]
    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = help_text.into();
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }
}

/// Field-specific configuration, tagged by the field id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "id", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum FieldConfig {
    Title {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_length: Option<String>,
    },
    Description {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_length: Option<String>,
    },
    OutputType {
        #[serde(default)]
        output_type_config: OutputTypeConfig,
    },
    DataFlags {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<ColumnContent>,
    },
    RepoSelector {
        #[serde(default)]
        repo_config: RepoConfig,
    },
    MetadataStandards {
        #[serde(default)]
        meta_data_config: MetaDataConfig,
    },
    Licenses {
        #[serde(default)]
        licenses_config: LicensesConfig,
    },
    AccessLevels {
        #[serde(default)]
        access_levels_config: AccessLevelsConfig,
    },
}

impl FieldConfig {
    /// The unconfigured state of a field.
    pub fn empty(id: StandardFieldId) -> Self {
        match id {
            StandardFieldId::Title => FieldConfig::Title { max_length: None },
            StandardFieldId::Description => FieldConfig::Description { max_length: None },
            StandardFieldId::OutputType => FieldConfig::OutputType {
                output_type_config: OutputTypeConfig::default(),
            },
            StandardFieldId::DataFlags => FieldConfig::DataFlags { content: None },
            StandardFieldId::RepoSelector => FieldConfig::RepoSelector {
                repo_config: RepoConfig::default(),
            },
            StandardFieldId::MetadataStandards => FieldConfig::MetadataStandards {
                meta_data_config: MetaDataConfig::default(),
            },
            StandardFieldId::Licenses => FieldConfig::Licenses {
                licenses_config: LicensesConfig::default(),
            },
            StandardFieldId::AccessLevels => FieldConfig::AccessLevels {
                access_levels_config: AccessLevelsConfig::default(),
            },
        }
    }

    pub fn id(&self) -> StandardFieldId {
        match self {
            FieldConfig::Title { .. } => StandardFieldId::Title,
            FieldConfig::Description { .. } => StandardFieldId::Description,
            FieldConfig::OutputType { .. } => StandardFieldId::OutputType,
            FieldConfig::DataFlags { .. } => StandardFieldId::DataFlags,
            FieldConfig::RepoSelector { .. } => StandardFieldId::RepoSelector,
            FieldConfig::MetadataStandards { .. } => StandardFieldId::MetadataStandards,
            FieldConfig::Licenses { .. } => StandardFieldId::Licenses,
            FieldConfig::AccessLevels { .. } => StandardFieldId::AccessLevels,
        }
    }
}

/// Whether a selector uses the system defaults or the author's own entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionMode {
    #[default]
    Defaults,
    Mine,
}

/// License selection mode: defaults only, or custom licenses added to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LicensesMode {
    #[default]
    Defaults,
    AddToDefaults,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputTypeConfig {
    #[serde(default)]
    pub mode: SelectionMode,
    /// Names of the default output types the author kept.
    #[serde(default)]
    pub selected_defaults: Vec<String>,
    #[serde(default)]
    pub custom_types: Vec<CustomOutputType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomOutputType {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A named entry with an optional link, used for repositories, metadata
/// standards and licenses.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl CustomEntry {
    pub fn new(name: impl Into<String>, uri: Option<String>) -> Self {
        Self {
            name: name.into(),
            uri,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoConfig {
    #[serde(default)]
    pub has_custom_repos: bool,
    #[serde(default)]
    pub custom_repos: Vec<CustomEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaDataConfig {
    #[serde(default)]
    pub has_custom_standards: bool,
    #[serde(default)]
    pub custom_standards: Vec<CustomEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicensesConfig {
    #[serde(default)]
    pub mode: LicensesMode,
    #[serde(default)]
    pub selected_defaults: Vec<String>,
    #[serde(default)]
    pub custom_types: Vec<CustomEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessLevelsConfig {
    #[serde(default)]
    pub mode: SelectionMode,
    /// Labels of the default access levels the author kept.
    #[serde(default)]
    pub selected_defaults: Vec<String>,
    #[serde(default)]
    pub custom_levels: Vec<CustomAccessLevel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAccessLevel {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A user-defined free-text column.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalField {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub default_value: String,
    #[serde(default)]
    pub custom_label: String,
    #[serde(default)]
    pub help_text: String,
    /// String-encoded integer; empty when unset.
    #[serde(default)]
    pub max_length: String,
}

impl AdditionalField {
    /// The label shown as the column heading.
    pub fn display_label(&self) -> &str {
        if self.custom_label.trim().is_empty() {
            &self.label
        } else {
            &self.custom_label
        }
    }
}

/// An entry of the backend's default output-type catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultOutputType {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
