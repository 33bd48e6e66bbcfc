//! Answer rows for a configured research output table.

use serde::Serialize;

use dmp_model::{
    Answer, ColumnAnswer, ColumnContent, FieldContent, MetadataStandardRef,
    NumberWithContextValue, RepositoryRef, ResearchOutputColumn, ResearchOutputTableRow,
    SelectContent, StandardFieldId, headings::position_of,
};

use crate::utils::{strip_html, truncate_with_ellipsis};

/// Title shown for a row whose title answer is blank or missing.
pub const UNTITLED_RESEARCH_OUTPUT: &str = "Untitled Research Output";
/// Characters of a row title kept before it is cut with `...`.
pub const TITLE_DISPLAY_LIMIT: usize = 50;

/// Summary of a row for list displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowDisplayInfo {
    pub title: String,
    pub output_type: String,
    pub repositories: Vec<String>,
}

/// A fresh row with one default answer per column.
///
/// A release-date answer and a byte-size answer are always appended after
/// the configured columns, even when `columns` is empty.
pub fn create_empty_research_output_row(
    columns: &[ResearchOutputColumn],
) -> ResearchOutputTableRow {
    let mut answers: Vec<ColumnAnswer> = columns.iter().map(default_answer).collect();
    answers.push(ColumnAnswer::Date(Answer::new(String::new())));
    answers.push(ColumnAnswer::NumberWithContext(Answer::new(
        NumberWithContextValue::default(),
    )));
    ResearchOutputTableRow { columns: answers }
}

fn default_answer(column: &ResearchOutputColumn) -> ColumnAnswer {
    match &column.content {
        ColumnContent::Text(c) => ColumnAnswer::Text(Answer::new(default_text(c))),
        ColumnContent::TextArea(c) => ColumnAnswer::TextArea(Answer::new(default_text(c))),
        ColumnContent::Date(c) => ColumnAnswer::Date(Answer::new(default_text(c))),
        ColumnContent::Number(_) => ColumnAnswer::Number(Answer::new(None)),
        ColumnContent::SelectBox(c) => ColumnAnswer::SelectBox(Answer::new(selected_value(c))),
        ColumnContent::RadioButtons(c) => {
            ColumnAnswer::RadioButtons(Answer::new(selected_value(c)))
        }
        ColumnContent::CheckBoxes(c) => ColumnAnswer::CheckBoxes(Answer::new(
            c.options
                .iter()
                .filter(|o| o.checked)
                .map(|o| o.value.clone())
                .collect(),
        )),
        ColumnContent::RepositorySearch(c) => ColumnAnswer::RepositorySearch(Answer::new(
            c.preferences
                .iter()
                .flatten()
                .map(|p| RepositoryRef {
                    repository_id: p.value.clone(),
                    repository_name: p.label.clone(),
                })
                .collect(),
        )),
        ColumnContent::MetadataStandardSearch(c) => {
            ColumnAnswer::MetadataStandardSearch(Answer::new(
                c.preferences
                    .iter()
                    .flatten()
                    .map(|p| MetadataStandardRef {
                        metadata_standard_id: p.value.clone(),
                        metadata_standard_name: p.label.clone(),
                    })
                    .collect(),
            ))
        }
        ColumnContent::LicenseSearch(_) => ColumnAnswer::LicenseSearch(Answer::new(Vec::new())),
        ColumnContent::NumberWithContext(c) => {
            ColumnAnswer::NumberWithContext(Answer::new(NumberWithContextValue {
                value: None,
                context: c.context.first().map(|u| u.value.clone()).unwrap_or_default(),
            }))
        }
        ColumnContent::Unknown => ColumnAnswer::Unknown,
    }
}

fn default_text(content: &FieldContent) -> String {
    content.attributes.default_value.clone().unwrap_or_default()
}

fn selected_value(content: &SelectContent) -> String {
    content
        .options
        .iter()
        .find(|o| o.selected)
        .map(|o| o.value.clone())
        .unwrap_or_default()
}

/// Title, output type and repositories of `row`, for list displays.
///
/// Missing columns and answers of an unexpected shape fall back to empty
/// values; a blank title becomes [`UNTITLED_RESEARCH_OUTPUT`].
pub fn get_row_display_info(
    row: &ResearchOutputTableRow,
    columns: &[ResearchOutputColumn],
) -> RowDisplayInfo {
    let answer_for = |id: StandardFieldId| {
        position_of(columns, id).and_then(|index| row.columns.get(index).map(|a| (index, a)))
    };

    let title = answer_for(StandardFieldId::Title)
        .and_then(|(_, answer)| answer.as_text())
        .map(|raw| strip_html(raw).trim().to_string())
        .filter(|t| !t.is_empty())
        .map(|t| truncate_with_ellipsis(&t, TITLE_DISPLAY_LIMIT))
        .unwrap_or_else(|| UNTITLED_RESEARCH_OUTPUT.to_string());

    let output_type = answer_for(StandardFieldId::OutputType)
        .and_then(|(index, answer)| {
            let value = answer.as_choice()?;
            let label = columns[index]
                .content
                .select_options()
                .and_then(|options| options.iter().find(|o| o.value == value))
                .map(|o| o.label.clone());
            Some(label.unwrap_or_else(|| value.to_string()))
        })
        .unwrap_or_default();

    let repositories = answer_for(StandardFieldId::RepoSelector)
        .and_then(|(_, answer)| answer.as_repositories())
        .map(|repos| repos.iter().map(|r| r.repository_name.clone()).collect())
        .unwrap_or_default();

    RowDisplayInfo {
        title,
        output_type,
        repositories,
    }
}
