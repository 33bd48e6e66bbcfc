//! Persisted research output table question schema.
//!
//! These types mirror the JSON document stored by the backend for a
//! `researchOutputTable` question. Every optional attribute defaults when
//! absent or of the wrong type, so hand-edited documents and those written by
//! older editors still deserialize. Only the `type` marker and the `columns`
//! list are required.

use serde::{Deserialize, Serialize};

use crate::lenient;

/// Schema version written into every emitted `meta` block.
pub const CURRENT_SCHEMA_VERSION: &str = "1.0";

/// Version marker attached to questions, columns and answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemaMeta {
    pub schema_version: String,
}

impl Default for SchemaMeta {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION.to_string(),
        }
    }
}

/// Discriminator for the only question type this crate models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResearchOutputTableType {
    #[default]
    #[serde(rename = "researchOutputTable")]
    ResearchOutputTable,
}

/// Table-level attributes (labels and row-count limits).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableAttributes {
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub label: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub help: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub can_add_rows: Option<bool>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub can_remove_rows: Option<bool>,
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub initial_rows: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_rows: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_rows: Option<u32>,
}

/// A `researchOutputTable` question: an ordered list of typed columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchOutputTableQuestion {
    #[serde(rename = "type")]
    pub question_type: ResearchOutputTableType,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub meta: SchemaMeta,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub attributes: TableAttributes,
    #[serde(deserialize_with = "lenient::items")]
    pub columns: Vec<ResearchOutputColumn>,
}

fn enabled_by_default() -> bool {
    true
}

/// One column of the research output table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchOutputColumn {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub heading: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub required: bool,
    #[serde(default = "enabled_by_default", deserialize_with = "lenient::bool_or_true")]
    pub enabled: bool,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub help: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub language_translation_key: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub content: ColumnContent,
}

/// Typed content descriptor of a column, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ColumnContent {
    Text(FieldContent),
    TextArea(FieldContent),
    Number(FieldContent),
    Date(FieldContent),
    SelectBox(SelectContent),
    RadioButtons(SelectContent),
    CheckBoxes(CheckBoxesContent),
    RepositorySearch(SearchContent),
    MetadataStandardSearch(SearchContent),
    LicenseSearch(SearchContent),
    NumberWithContext(NumberWithContextContent),
    /// Any content type this crate does not model.
    #[default]
    #[serde(other)]
    Unknown,
}

impl ColumnContent {
    /// Wire name of the content type.
    pub fn type_name(&self) -> &'static str {
        match self {
            ColumnContent::Text(_) => "text",
            ColumnContent::TextArea(_) => "textArea",
            ColumnContent::Number(_) => "number",
            ColumnContent::Date(_) => "date",
            ColumnContent::SelectBox(_) => "selectBox",
            ColumnContent::RadioButtons(_) => "radioButtons",
            ColumnContent::CheckBoxes(_) => "checkBoxes",
            ColumnContent::RepositorySearch(_) => "repositorySearch",
            ColumnContent::MetadataStandardSearch(_) => "metadataStandardSearch",
            ColumnContent::LicenseSearch(_) => "licenseSearch",
            ColumnContent::NumberWithContext(_) => "numberWithContext",
            ColumnContent::Unknown => "unknown",
        }
    }

    pub fn attributes(&self) -> Option<&ContentAttributes> {
        match self {
            ColumnContent::Text(c)
            | ColumnContent::TextArea(c)
            | ColumnContent::Number(c)
            | ColumnContent::Date(c) => Some(&c.attributes),
            ColumnContent::SelectBox(c) | ColumnContent::RadioButtons(c) => Some(&c.attributes),
            ColumnContent::CheckBoxes(c) => Some(&c.attributes),
            ColumnContent::RepositorySearch(c)
            | ColumnContent::MetadataStandardSearch(c)
            | ColumnContent::LicenseSearch(c) => Some(&c.attributes),
            ColumnContent::NumberWithContext(c) => Some(&c.attributes),
            ColumnContent::Unknown => None,
        }
    }

    /// Selectable options of a select box or radio group.
    pub fn select_options(&self) -> Option<&[SelectOption]> {
        match self {
            ColumnContent::SelectBox(c) | ColumnContent::RadioButtons(c) => Some(&c.options),
            _ => None,
        }
    }

    /// Pinned preferences of a search-type column, when present.
    pub fn preferences(&self) -> Option<&[Preference]> {
        match self {
            ColumnContent::RepositorySearch(c)
            | ColumnContent::MetadataStandardSearch(c)
            | ColumnContent::LicenseSearch(c) => c.preferences.as_deref(),
            _ => None,
        }
    }
}

/// Attributes shared by all content types. Each content type only uses a subset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAttributes {
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub label: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub help: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_length: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_length: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_value: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub pattern: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub rows: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub cols: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub as_rich_text: Option<bool>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub multiple: Option<bool>,
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub min: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub max: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub step: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldContent {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub meta: SchemaMeta,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub attributes: ContentAttributes,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectContent {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub meta: SchemaMeta,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub attributes: ContentAttributes,
    #[serde(default, deserialize_with = "lenient::items_or_empty")]
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CheckBoxesContent {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub meta: SchemaMeta,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub attributes: ContentAttributes,
    #[serde(default, deserialize_with = "lenient::items_or_empty")]
    pub options: Vec<CheckBoxOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CheckBoxOption {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub checked: bool,
}

/// Content of a repository, metadata-standard or license search column.
///
/// `preferences` is omitted from the wire form when `None`; an empty list is
/// written out explicitly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchContent {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub meta: SchemaMeta,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub attributes: ContentAttributes,
    #[serde(
        default,
        deserialize_with = "lenient::optional_items",
        skip_serializing_if = "Option::is_none"
    )]
    pub preferences: Option<Vec<Preference>>,
}

/// A pinned or custom choice of a search column.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preference {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NumberWithContextContent {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub meta: SchemaMeta,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub attributes: ContentAttributes,
    #[serde(default, deserialize_with = "lenient::items_or_empty")]
    pub context: Vec<ContextUnit>,
}

/// A unit the number of a `numberWithContext` column can be expressed in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContextUnit {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: String,
}

/// Any persisted question document.
///
/// Anything that is not a research output table (another question type, a
/// missing or non-list `columns`) is kept as raw JSON in
/// [`AnyParsedQuestion::Other`]. Malformed columns and attributes inside a
/// table degrade on their own and never demote the whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnyParsedQuestion {
    ResearchOutputTable(ResearchOutputTableQuestion),
    Other(serde_json::Value),
}

impl AnyParsedQuestion {
    pub fn from_value(value: serde_json::Value) -> Self {
        match serde_json::from_value::<ResearchOutputTableQuestion>(value.clone()) {
            Ok(question) => AnyParsedQuestion::ResearchOutputTable(question),
            Err(_) => AnyParsedQuestion::Other(value),
        }
    }

    /// Parse a JSON document. Only invalid JSON syntax is an error.
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<serde_json::Value>(raw).map(Self::from_value)
    }

    pub fn as_research_output_table(&self) -> Option<&ResearchOutputTableQuestion> {
        match self {
            AnyParsedQuestion::ResearchOutputTable(question) => Some(question),
            AnyParsedQuestion::Other(_) => None,
        }
    }
}

impl From<ResearchOutputTableQuestion> for AnyParsedQuestion {
    fn from(question: ResearchOutputTableQuestion) -> Self {
        AnyParsedQuestion::ResearchOutputTable(question)
    }
}
