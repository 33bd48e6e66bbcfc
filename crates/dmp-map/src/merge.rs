//! Overlay of editor overrides onto template columns.
//!
//! Every emitted standard column starts from its template column; only the
//! values the author changed are written over it.

use dmp_model::{
    ColumnContent, ContentAttributes, CustomEntry, FieldContent, Preference, ResearchOutputColumn,
    SearchContent, SelectContent, SelectOption, StandardField,
};

/// Build a column from its template and the field's common settings.
pub(crate) fn merge_column(
    template: &ResearchOutputColumn,
    field: &StandardField,
    content: ColumnContent,
) -> ResearchOutputColumn {
    ResearchOutputColumn {
        heading: template.heading.clone(),
        required: field.required,
        enabled: true,
        help: Some(field.help_text.clone()),
        language_translation_key: field
            .language_translation_key
            .clone()
            .or_else(|| template.language_translation_key.clone()),
        content,
    }
}

/// Apply the field's label and help text onto template attributes.
///
/// A blank label keeps the template label.
pub(crate) fn merge_attributes(
    template: &ContentAttributes,
    field: &StandardField,
) -> ContentAttributes {
    let mut attributes = template.clone();
    if !field.label.trim().is_empty() {
        attributes.label = Some(field.label.clone());
    }
    attributes.help = Some(field.help_text.clone());
    attributes
}

/// Plain field content from a `text`-like template, or empty content.
pub(crate) fn field_content(template: &ColumnContent) -> FieldContent {
    match template {
        ColumnContent::Text(c)
        | ColumnContent::TextArea(c)
        | ColumnContent::Number(c)
        | ColumnContent::Date(c) => c.clone(),
        _ => FieldContent::default(),
    }
}

/// Select content from a select-like template, or empty content.
pub(crate) fn select_content(template: &ColumnContent) -> SelectContent {
    match template {
        ColumnContent::SelectBox(c) | ColumnContent::RadioButtons(c) => c.clone(),
        _ => SelectContent::default(),
    }
}

/// Search content from a search-like template, or empty content.
pub(crate) fn search_content(template: &ColumnContent) -> SearchContent {
    match template {
        ColumnContent::RepositorySearch(c)
        | ColumnContent::MetadataStandardSearch(c)
        | ColumnContent::LicenseSearch(c) => c.clone(),
        _ => SearchContent::default(),
    }
}

pub(crate) fn preferences_from(entries: &[CustomEntry]) -> Vec<Preference> {
    entries
        .iter()
        .map(|entry| Preference {
            label: entry.name.clone(),
            value: entry.uri.clone().unwrap_or_default(),
        })
        .collect()
}

pub(crate) fn entries_from(preferences: &[Preference]) -> Vec<CustomEntry> {
    preferences
        .iter()
        .map(|pref| {
            let uri = Some(pref.value.clone()).filter(|v| !v.trim().is_empty());
            CustomEntry::new(pref.label.clone(), uri)
        })
        .collect()
}

/// Value of the template option whose label matches `label`.
pub(crate) fn template_option_value<'a>(
    options: &'a [SelectOption],
    label: &str,
) -> Option<&'a str> {
    options
        .iter()
        .find(|o| o.label.trim().eq_ignore_ascii_case(label.trim()))
        .map(|o| o.value.as_str())
}

pub(crate) fn unselected(label: &str, value: String) -> SelectOption {
    SelectOption {
        label: label.to_string(),
        value,
        selected: false,
    }
}
