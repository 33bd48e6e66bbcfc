#![deny(unsafe_code)]

pub mod answer;
pub mod error;
pub mod field;
pub mod headings;
pub mod ids;
mod lenient;
pub mod question;

pub use answer::{
    Answer, ColumnAnswer, LicenseRef, MetadataStandardRef, NumberWithContextValue,
    RepositoryRef, ResearchOutputTableRow,
};
pub use error::{ModelError, Result};
pub use field::{
    AccessLevelsConfig, AdditionalField, CustomAccessLevel, CustomEntry, CustomOutputType,
    DefaultOutputType, FieldConfig, LicensesConfig, LicensesMode, MetaDataConfig,
    OutputTypeConfig, RepoConfig, SelectionMode, StandardField,
};
pub use headings::{
    HEADING_ALIASES, HeadingKind, TrailingColumn, aliases_for, is_standard_heading,
    resolve_heading, standard_field_for_heading,
};
pub use ids::StandardFieldId;
pub use question::{
    AnyParsedQuestion, CURRENT_SCHEMA_VERSION, CheckBoxOption, CheckBoxesContent, ColumnContent,
    ContentAttributes, ContextUnit, FieldContent, NumberWithContextContent, Preference,
    ResearchOutputColumn, ResearchOutputTableQuestion, ResearchOutputTableType, SchemaMeta,
    SearchContent, SelectContent, SelectOption, TableAttributes,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_field_serializes_flat() {
        let field = StandardField::new(StandardFieldId::Title, "Title")
            .enabled(true)
            .with_config(FieldConfig::Title {
                max_length: Some("300".to_string()),
            });
        let json = serde_json::to_value(&field).expect("serialize field");
        assert_eq!(json["id"], "title");
        assert_eq!(json["maxLength"], "300");
        assert_eq!(json["enabled"], true);
    }

    #[test]
    fn unknown_content_type_is_tolerated() {
        let column: ResearchOutputColumn = serde_json::from_value(serde_json::json!({
            "heading": "Notes",
            "content": { "type": "fancyWidget", "attributes": { "label": "x" } }
        }))
        .expect("deserialize column");
        assert_eq!(column.content, ColumnContent::Unknown);
        assert!(column.enabled);
        assert!(!column.required);
    }
}
