use dmp_map::{EditorState, SchemaMapper};
use dmp_model::{
    AccessLevelsConfig, AdditionalField, ColumnContent, CustomAccessLevel, CustomEntry,
    CustomOutputType, FieldConfig, LicensesConfig, LicensesMode, OutputTypeConfig, RepoConfig,
    ResearchOutputColumn, ResearchOutputTableQuestion, SelectionMode, StandardField,
    StandardFieldId,
};
use dmp_standards::StandardsRegistry;
use serde_json::json;

fn registry() -> StandardsRegistry {
    StandardsRegistry::load_embedded().expect("embedded standards")
}

fn enable_only(registry: &StandardsRegistry, ids: &[StandardFieldId]) -> Vec<StandardField> {
    registry
        .standard_fields
        .iter()
        .cloned()
        .map(|f| {
            let enabled = ids.contains(&f.id());
            f.enabled(enabled)
        })
        .collect()
}

fn with_config(fields: &mut [StandardField], config: FieldConfig) {
    let id = config.id();
    let field = fields
        .iter_mut()
        .find(|f| f.id() == id)
        .expect("field present");
    field.config = config;
}

fn column<'a>(question: &'a ResearchOutputTableQuestion, heading: &str) -> &'a ResearchOutputColumn {
    question
        .columns
        .iter()
        .find(|c| c.heading == heading)
        .unwrap_or_else(|| panic!("missing column {heading}"))
}

#[test]
fn default_state_emits_enabled_fields_in_order() {
    let registry = registry();
    let mapper = SchemaMapper::from_registry(&registry);
    let state = EditorState::from_registry(&registry);
    let question = state
        .to_question(&mapper, Some(&registry.output_types))
        .expect("question");

    let headings: Vec<&str> = question.columns.iter().map(|c| c.heading.as_str()).collect();
    assert_eq!(headings, vec!["Title", "Description", "Output Type"]);
    assert!(question.columns.iter().all(|c| c.enabled));
    assert_eq!(question.meta.schema_version, "1.0");
    assert_eq!(question.attributes.label.as_deref(), Some("Research Outputs"));
}

#[test]
fn title_max_length_override_is_numeric() {
    let registry = registry();
    let mapper = SchemaMapper::from_registry(&registry);
    let mut fields = enable_only(&registry, &[StandardFieldId::Title]);
    with_config(
        &mut fields,
        FieldConfig::Title {
            max_length: Some("300".to_string()),
        },
    );

    let question = mapper.state_to_json(&fields, &[], None).unwrap();
    let json = serde_json::to_value(&question.columns[0]).unwrap();
    assert_eq!(json["heading"], "Title");
    assert_eq!(json["content"]["attributes"]["maxLength"], 300);
}

#[test]
fn output_type_defaults_use_catalog_values() {
    let registry = registry();
    let mapper = SchemaMapper::from_registry(&registry);
    let mut fields = enable_only(&registry, &[StandardFieldId::OutputType]);
    with_config(
        &mut fields,
        FieldConfig::OutputType {
            output_type_config: OutputTypeConfig {
                mode: SelectionMode::Defaults,
                selected_defaults: vec!["Dataset".to_string(), "Lab Notebook".to_string()],
                custom_types: Vec::new(),
            },
        },
    );

    let question = mapper
        .state_to_json(&fields, &[], Some(&registry.output_types))
        .unwrap();
    let options = question.columns[0].content.select_options().unwrap();
    assert_eq!(options.len(), 2);
    assert_eq!(options[0].value, "DATASET");
    assert_eq!(options[1].value, "lab-notebook");
    assert!(options.iter().all(|o| !o.selected));
}

#[test]
fn output_type_mine_uses_slugs() {
    let registry = registry();
    let mapper = SchemaMapper::from_registry(&registry);
    let mut fields = enable_only(&registry, &[StandardFieldId::OutputType]);
    with_config(
        &mut fields,
        FieldConfig::OutputType {
            output_type_config: OutputTypeConfig {
                mode: SelectionMode::Mine,
                selected_defaults: vec!["Dataset".to_string()],
                custom_types: vec![CustomOutputType {
                    name: "Field Notes".to_string(),
                    description: None,
                }],
            },
        },
    );

    let question = mapper
        .state_to_json(&fields, &[], Some(&registry.output_types))
        .unwrap();
    let options = question.columns[0].content.select_options().unwrap();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].label, "Field Notes");
    assert_eq!(options[0].value, "field-notes");
}

#[test]
fn empty_default_selection_emits_no_options() {
    let registry = registry();
    let mapper = SchemaMapper::from_registry(&registry);
    let mut fields = enable_only(&registry, &[StandardFieldId::OutputType]);
    with_config(
        &mut fields,
        FieldConfig::OutputType {
            output_type_config: OutputTypeConfig::default(),
        },
    );
    let question = mapper.state_to_json(&fields, &[], None).unwrap();
    assert!(question.columns[0].content.select_options().unwrap().is_empty());
}

#[test]
fn repository_preferences_only_when_custom() {
    let registry = registry();
    let mapper = SchemaMapper::from_registry(&registry);
    let fields = enable_only(&registry, &[StandardFieldId::RepoSelector]);

    let question = mapper.state_to_json(&fields, &[], None).unwrap();
    let json = serde_json::to_value(&question.columns[0].content).unwrap();
    assert!(json.get("preferences").is_none());

    let mut fields = fields;
    with_config(
        &mut fields,
        FieldConfig::RepoSelector {
            repo_config: RepoConfig {
                has_custom_repos: true,
                custom_repos: vec![CustomEntry::new(
                    "Zenodo",
                    Some("https://zenodo.org".to_string()),
                )],
            },
        },
    );
    let question = mapper.state_to_json(&fields, &[], None).unwrap();
    let json = serde_json::to_value(&question.columns[0].content).unwrap();
    assert_eq!(
        json["preferences"],
        json!([{ "label": "Zenodo", "value": "https://zenodo.org" }])
    );
}

#[test]
fn licenses_always_write_preferences() {
    let registry = registry();
    let mapper = SchemaMapper::from_registry(&registry);
    let mut fields = enable_only(&registry, &[StandardFieldId::Licenses]);

    let question = mapper.state_to_json(&fields, &[], None).unwrap();
    let json = serde_json::to_value(&question.columns[0].content).unwrap();
    assert_eq!(json["type"], "licenseSearch");
    assert_eq!(json["preferences"], json!([]));

    with_config(
        &mut fields,
        FieldConfig::Licenses {
            licenses_config: LicensesConfig {
                mode: LicensesMode::AddToDefaults,
                selected_defaults: Vec::new(),
                custom_types: vec![CustomEntry::new("Institutional License", None)],
            },
        },
    );
    let question = mapper.state_to_json(&fields, &[], None).unwrap();
    let json = serde_json::to_value(&question.columns[0].content).unwrap();
    assert_eq!(
        json["preferences"],
        json!([{ "label": "Institutional License", "value": "" }])
    );
}

#[test]
fn access_levels_reuse_template_values() {
    let registry = registry();
    let mapper = SchemaMapper::from_registry(&registry);
    let mut fields = enable_only(&registry, &[StandardFieldId::AccessLevels]);

    let question = mapper.state_to_json(&fields, &[], None).unwrap();
    let column = column(&question, "Initial Access Levels");
    let values: Vec<&str> = column
        .content
        .select_options()
        .unwrap()
        .iter()
        .map(|o| o.value.as_str())
        .collect();
    assert_eq!(values, vec!["open", "restricted", "closed"]);

    with_config(
        &mut fields,
        FieldConfig::AccessLevels {
            access_levels_config: AccessLevelsConfig {
                mode: SelectionMode::Mine,
                selected_defaults: Vec::new(),
                custom_levels: vec![
                    CustomAccessLevel {
                        label: "Embargoed".to_string(),
                        value: "embargo".to_string(),
                        description: None,
                    },
                    CustomAccessLevel {
                        label: "Members Only".to_string(),
                        value: String::new(),
                        description: None,
                    },
                ],
            },
        },
    );
    let question = mapper.state_to_json(&fields, &[], None).unwrap();
    let options = question.columns[0].content.select_options().unwrap();
    assert_eq!(options[0].value, "embargo");
    assert_eq!(options[1].value, "members-only");
}

#[test]
fn data_flags_fall_back_to_template_content() {
    let registry = registry();
    let mapper = SchemaMapper::from_registry(&registry);
    let fields = enable_only(&registry, &[StandardFieldId::DataFlags]);
    let question = mapper.state_to_json(&fields, &[], None).unwrap();
    match &question.columns[0].content {
        ColumnContent::CheckBoxes(content) => assert_eq!(content.options.len(), 2),
        other => panic!("unexpected content: {other:?}"),
    }
}

#[test]
fn field_label_and_help_override_template() {
    let registry = registry();
    let mapper = SchemaMapper::from_registry(&registry);
    let mut fields = enable_only(&registry, &[StandardFieldId::Description]);
    fields[1].label = "Summary".to_string();
    fields[1].help_text = "Two sentences.".to_string();
    fields[1].language_translation_key = Some("ResearchOutput.summary".to_string());

    let question = mapper.state_to_json(&fields, &[], None).unwrap();
    let column = &question.columns[0];
    assert_eq!(column.heading, "Description");
    assert_eq!(column.help.as_deref(), Some("Two sentences."));
    assert_eq!(
        column.language_translation_key.as_deref(),
        Some("ResearchOutput.summary")
    );
    let attributes = column.content.attributes().unwrap();
    assert_eq!(attributes.label.as_deref(), Some("Summary"));
    assert_eq!(attributes.as_rich_text, Some(true));
    assert!(matches!(column.content, ColumnContent::TextArea(_)));
}

#[test]
fn disabled_additional_fields_are_skipped() {
    let registry = registry();
    let mapper = SchemaMapper::from_registry(&registry);
    let additional = vec![
        AdditionalField {
            id: "notes".to_string(),
            label: "Notes".to_string(),
            enabled: false,
            ..AdditionalField::default()
        },
        AdditionalField {
            id: "grant".to_string(),
            label: "Grant".to_string(),
            custom_label: "Grant Number".to_string(),
            enabled: true,
            default_value: "N/A".to_string(),
            max_length: "abc".to_string(),
            ..AdditionalField::default()
        },
    ];
    let question = mapper.state_to_json(&[], &additional, None).unwrap();
    assert_eq!(question.columns.len(), 1);
    let column = &question.columns[0];
    assert_eq!(column.heading, "Grant Number");
    let attributes = column.content.attributes().unwrap();
    assert_eq!(attributes.default_value.as_deref(), Some("N/A"));
    assert_eq!(attributes.max_length, None);
}

#[test]
fn title_with_additional_field_snapshot() {
    let registry = registry();
    let mapper = SchemaMapper::from_registry(&registry);
    let fields = enable_only(&registry, &[StandardFieldId::Title]);
    let additional = vec![AdditionalField {
        id: "funding_source".to_string(),
        label: "Funding Source".to_string(),
        enabled: true,
        help_text: "Who funds this output?".to_string(),
        max_length: "120".to_string(),
        ..AdditionalField::default()
    }];
    let question = mapper.state_to_json(&fields, &additional, None).unwrap();
    insta::assert_json_snapshot!(question);
}
