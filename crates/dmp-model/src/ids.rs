use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Identifier of one of the closed set of standard research output fields.
///
/// The serialized form is the id used by the question-builder editor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StandardFieldId {
    Title,
    Description,
    OutputType,
    DataFlags,
    RepoSelector,
    MetadataStandards,
    Licenses,
    AccessLevels,
}

impl StandardFieldId {
    /// Every standard field in canonical editor order.
    pub const ALL: [StandardFieldId; 8] = [
        StandardFieldId::Title,
        StandardFieldId::Description,
        StandardFieldId::OutputType,
        StandardFieldId::DataFlags,
        StandardFieldId::RepoSelector,
        StandardFieldId::MetadataStandards,
        StandardFieldId::Licenses,
        StandardFieldId::AccessLevels,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StandardFieldId::Title => "title",
            StandardFieldId::Description => "description",
            StandardFieldId::OutputType => "outputType",
            StandardFieldId::DataFlags => "dataFlags",
            StandardFieldId::RepoSelector => "repoSelector",
            StandardFieldId::MetadataStandards => "metadataStandards",
            StandardFieldId::Licenses => "licenses",
            StandardFieldId::AccessLevels => "accessLevels",
        }
    }
}

impl fmt::Display for StandardFieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StandardFieldId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        StandardFieldId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownFieldId(s.to_string()))
    }
}
