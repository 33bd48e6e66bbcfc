use std::fs;
use std::path::Path;

use dmp_model::{FieldConfig, SelectionMode, StandardFieldId};
use dmp_standards::{StandardsError, StandardsRegistry, StandardsSource, bundled_standards_dir};
use tempfile::TempDir;

fn copy_bundled(into: &Path) {
    for entry in fs::read_dir(bundled_standards_dir()).unwrap() {
        let entry = entry.unwrap();
        fs::copy(entry.path(), into.join(entry.file_name())).unwrap();
    }
}

#[test]
fn embedded_summary_snapshot_is_stable() {
    let registry = StandardsRegistry::load_embedded().expect("embedded standards");
    insta::assert_json_snapshot!(registry.summary());
}

#[test]
fn bundled_directory_matches_embedded() {
    let from_dir = StandardsRegistry::load_from_dir(&bundled_standards_dir()).unwrap();
    let embedded = StandardsRegistry::load_embedded().unwrap();
    assert_eq!(from_dir.template, embedded.template);
    assert_eq!(from_dir.standard_fields, embedded.standard_fields);
    assert_eq!(from_dir.output_types, embedded.output_types);
    assert!(matches!(from_dir.source, StandardsSource::Directory(_)));
}

#[test]
fn default_output_type_selection_covers_catalog() {
    let registry = StandardsRegistry::load_embedded().unwrap();
    let field = registry
        .standard_field(StandardFieldId::OutputType)
        .expect("output type field");
    let FieldConfig::OutputType { output_type_config } = &field.config else {
        panic!("unexpected config: {:?}", field.config);
    };
    assert_eq!(output_type_config.mode, SelectionMode::Defaults);
    let names: Vec<&str> = registry.output_types.iter().map(|t| t.name.as_str()).collect();
    for selected in &output_type_config.selected_defaults {
        assert!(names.contains(&selected.as_str()), "{selected} not in catalog");
    }
}

#[test]
fn missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let err = StandardsRegistry::load_from_dir(dir.path()).unwrap_err();
    match err {
        StandardsError::Io { path, .. } => {
            assert!(path.ends_with("research_output_table.json"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_toml_is_reported() {
    let dir = TempDir::new().unwrap();
    copy_bundled(dir.path());
    fs::write(dir.path().join("output_types.toml"), "[[output_types]\nname = ").unwrap();
    let err = StandardsRegistry::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, StandardsError::Toml { .. }), "got {err}");
}

#[test]
fn template_without_standard_column_is_rejected() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    copy_bundled(dir);
    let raw = fs::read_to_string(dir.join("research_output_table.json")).unwrap();
    let mut template: serde_json::Value = serde_json::from_str(&raw).unwrap();
    template["columns"]
        .as_array_mut()
        .unwrap()
        .retain(|c| c["heading"] != "Title");
    fs::write(
        dir.join("research_output_table.json"),
        serde_json::to_string_pretty(&template).unwrap(),
    )
    .unwrap();

    let err = StandardsRegistry::load_from_dir(dir).unwrap_err();
    assert!(matches!(
        err,
        StandardsError::MissingTemplateColumn {
            field: StandardFieldId::Title
        }
    ));
}
