//! Answers of a research output table row.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::lenient;
use crate::question::SchemaMeta;

/// A single answer value together with its schema marker.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Answer<T> {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub meta: SchemaMeta,
    pub answer: T,
}

impl<T> Answer<T> {
    pub fn new(answer: T) -> Self {
        Self {
            meta: SchemaMeta::default(),
            answer,
        }
    }
}

/// The answer to one column, tagged by the column's content type.
///
/// Answer types this crate does not model, and answers whose value has the
/// wrong shape, read as [`ColumnAnswer::Unknown`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ColumnAnswer {
    Text(Answer<String>),
    TextArea(Answer<String>),
    Number(Answer<Option<f64>>),
    Date(Answer<String>),
    SelectBox(Answer<String>),
    RadioButtons(Answer<String>),
    CheckBoxes(Answer<Vec<String>>),
    RepositorySearch(Answer<Vec<RepositoryRef>>),
    MetadataStandardSearch(Answer<Vec<MetadataStandardRef>>),
    LicenseSearch(Answer<Vec<LicenseRef>>),
    NumberWithContext(Answer<NumberWithContextValue>),
    #[serde(other)]
    Unknown,
}

impl ColumnAnswer {
    /// The answer as free text, for text-like answers.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ColumnAnswer::Text(a) | ColumnAnswer::TextArea(a) | ColumnAnswer::Date(a) => {
                Some(&a.answer)
            }
            _ => None,
        }
    }

    /// The chosen value, for single-choice answers.
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            ColumnAnswer::SelectBox(a) | ColumnAnswer::RadioButtons(a) => Some(&a.answer),
            _ => None,
        }
    }

    pub fn as_repositories(&self) -> Option<&[RepositoryRef]> {
        match self {
            ColumnAnswer::RepositorySearch(a) => Some(&a.answer),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryRef {
    pub repository_id: String,
    pub repository_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataStandardRef {
    pub metadata_standard_id: String,
    pub metadata_standard_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseRef {
    pub license_id: String,
    pub license_name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NumberWithContextValue {
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub context: String,
}

/// One row of a research output table answer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResearchOutputTableRow {
    #[serde(deserialize_with = "answers")]
    pub columns: Vec<ColumnAnswer>,
}

/// Answers keep their position; one that cannot be read becomes `Unknown`.
fn answers<'de, D>(deserializer: D) -> Result<Vec<ColumnAnswer>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Vec::<Value>::deserialize(deserializer)?;
    Ok(items
        .into_iter()
        .map(|item| serde_json::from_value(item).unwrap_or(ColumnAnswer::Unknown))
        .collect())
}
