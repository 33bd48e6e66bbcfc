//! Column heading vocabulary.
//!
//! Persisted documents name their standard columns either with the current
//! namespaced keys (`researchOutput.repositories`) or with the plain English
//! headings written by older editors (`Repositories`). Both are listed here so
//! that the accepted aliases can be audited in one place.

use crate::ids::StandardFieldId;
use crate::question::{ResearchOutputColumn, ResearchOutputTableQuestion};

/// Columns appended after the configurable ones in every answer row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrailingColumn {
    ReleaseDate,
    ByteSize,
}

impl TrailingColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrailingColumn::ReleaseDate => "releaseDate",
            TrailingColumn::ByteSize => "byteSize",
        }
    }
}

/// What a recognized heading refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingKind {
    Standard(StandardFieldId),
    Trailing(TrailingColumn),
}

impl HeadingKind {
    /// Key of the editor section this heading belongs to.
    pub fn section_key(&self) -> &'static str {
        match self {
            HeadingKind::Standard(id) => id.as_str(),
            HeadingKind::Trailing(column) => column.as_str(),
        }
    }
}

pub const HEADING_ALIASES: &[(HeadingKind, &[&str])] = &[
    (
        HeadingKind::Standard(StandardFieldId::Title),
        &["Title", "researchOutput.title"],
    ),
    (
        HeadingKind::Standard(StandardFieldId::Description),
        &["Description", "researchOutput.description"],
    ),
    (
        HeadingKind::Standard(StandardFieldId::OutputType),
        &["Output Type", "researchOutput.outputType"],
    ),
    (
        HeadingKind::Standard(StandardFieldId::DataFlags),
        &["Data Flags", "researchOutput.dataFlags"],
    ),
    (
        HeadingKind::Standard(StandardFieldId::RepoSelector),
        &["Repositories", "researchOutput.repositories"],
    ),
    (
        HeadingKind::Standard(StandardFieldId::MetadataStandards),
        &["Metadata Standards", "researchOutput.metadataStandards"],
    ),
    (
        HeadingKind::Standard(StandardFieldId::Licenses),
        &["Licenses", "researchOutput.licenses"],
    ),
    (
        HeadingKind::Standard(StandardFieldId::AccessLevels),
        &[
            "Initial Access Levels",
            "Access Levels",
            "researchOutput.accessLevels",
        ],
    ),
    (
        HeadingKind::Trailing(TrailingColumn::ReleaseDate),
        &["Anticipated Release Date", "researchOutput.releaseDate"],
    ),
    (
        HeadingKind::Trailing(TrailingColumn::ByteSize),
        &["Byte Size", "researchOutput.byteSize"],
    ),
];

/// Resolve a heading against the alias table (trimmed, ASCII case-insensitive).
pub fn resolve_heading(heading: &str) -> Option<HeadingKind> {
    let heading = heading.trim();
    HEADING_ALIASES
        .iter()
        .find(|(_, aliases)| aliases.iter().any(|a| a.eq_ignore_ascii_case(heading)))
        .map(|(kind, _)| *kind)
}

/// True when `heading` belongs to the closed standard heading set.
pub fn is_standard_heading(heading: &str) -> bool {
    resolve_heading(heading).is_some()
}

/// The standard field a heading refers to, if any.
pub fn standard_field_for_heading(heading: &str) -> Option<StandardFieldId> {
    match resolve_heading(heading)? {
        HeadingKind::Standard(id) => Some(id),
        HeadingKind::Trailing(_) => None,
    }
}

/// All accepted aliases of a standard field.
pub fn aliases_for(id: StandardFieldId) -> &'static [&'static str] {
    HEADING_ALIASES
        .iter()
        .find(|(kind, _)| *kind == HeadingKind::Standard(id))
        .map(|(_, aliases)| *aliases)
        .unwrap_or(&[])
}

impl ResearchOutputTableQuestion {
    /// First column whose heading refers to `id`.
    pub fn column_for(&self, id: StandardFieldId) -> Option<&ResearchOutputColumn> {
        self.position_of(id).map(|idx| &self.columns[idx])
    }

    /// Index of the first column whose heading refers to `id`.
    pub fn position_of(&self, id: StandardFieldId) -> Option<usize> {
        position_of(&self.columns, id)
    }
}

/// Index of the first column in `columns` whose heading refers to `id`.
pub fn position_of(columns: &[ResearchOutputColumn], id: StandardFieldId) -> Option<usize> {
    columns
        .iter()
        .position(|c| standard_field_for_heading(&c.heading) == Some(id))
}
