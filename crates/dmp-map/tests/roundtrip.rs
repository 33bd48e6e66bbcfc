use dmp_map::{EditorState, SchemaMapper};
use dmp_model::{AdditionalField, AnyParsedQuestion, StandardField};
use dmp_standards::StandardsRegistry;
use proptest::prelude::*;

fn registry() -> StandardsRegistry {
    StandardsRegistry::load_embedded().expect("embedded standards")
}

fn configure(
    initial: &[StandardField],
    flags: &[(bool, bool)],
    help: &[String],
) -> Vec<StandardField> {
    initial
        .iter()
        .zip(flags)
        .zip(help)
        .map(|((field, (enabled, required)), help)| {
            field
                .clone()
                .enabled(*enabled)
                .required(*required)
                .with_help_text(help.clone())
        })
        .collect()
}

fn additional(labels: &[(String, bool)]) -> Vec<AdditionalField> {
    let mut state = EditorState::default();
    for (label, _) in labels {
        state.add_additional_field(label);
    }
    state
        .additional_fields
        .into_iter()
        .zip(labels)
        .map(|(mut field, (_, enabled))| {
            field.enabled = *enabled;
            field
        })
        .collect()
}

proptest! {
    #[test]
    fn column_count_matches_enabled_fields(
        flags in proptest::collection::vec((any::<bool>(), any::<bool>()), 8),
        help in proptest::collection::vec("[a-zA-Z ]{0,20}", 8),
        labels in proptest::collection::vec(("Extra [a-z]{1,8}", any::<bool>()), 0..4),
    ) {
        let registry = registry();
        let mapper = SchemaMapper::from_registry(&registry);
        let fields = configure(&registry.standard_fields, &flags, &help);
        let extra = additional(&labels);

        let question = mapper
            .state_to_json(&fields, &extra, Some(&registry.output_types))
            .unwrap();

        let expected = fields.iter().filter(|f| f.enabled).count()
            + extra.iter().filter(|f| f.enabled).count();
        prop_assert_eq!(question.columns.len(), expected);
        prop_assert!(question.columns.iter().all(|c| c.enabled));
    }

    #[test]
    fn export_then_import_restores_field_flags(
        flags in proptest::collection::vec((any::<bool>(), any::<bool>()), 8),
        help in proptest::collection::vec("[a-zA-Z ]{0,20}", 8),
    ) {
        let registry = registry();
        let mapper = SchemaMapper::from_registry(&registry);
        let fields = configure(&registry.standard_fields, &flags, &help);

        let question = mapper.state_to_json(&fields, &[], None).unwrap();
        let parsed = AnyParsedQuestion::from(question);
        let state = mapper.json_to_state(Some(&parsed), &fields);

        for (before, after) in fields.iter().zip(&state.standard_fields) {
            prop_assert_eq!(before.id(), after.id());
            prop_assert_eq!(before.enabled, after.enabled);
            prop_assert_eq!(before.required, after.required);
            prop_assert_eq!(&before.help_text, &after.help_text);
        }
        prop_assert!(state.additional_fields.is_empty());
    }
}

#[test]
fn additional_fields_survive_round_trip() {
    let registry = registry();
    let mapper = SchemaMapper::from_registry(&registry);
    let mut state = EditorState::from_registry(&registry);
    let id = state.add_additional_field("Funding Source");
    state.additional_fields[0].help_text = "Who pays".to_string();
    state.additional_fields[0].max_length = "64".to_string();

    let question = state
        .to_question(&mapper, Some(&registry.output_types))
        .unwrap();
    let restored = mapper.json_to_state(
        Some(&AnyParsedQuestion::from(question)),
        &registry.standard_fields,
    );
    assert_eq!(restored.additional_fields, state.additional_fields);
    assert_eq!(restored.additional_fields[0].id, id);
}

#[test]
fn custom_field_named_like_a_standard_column_stays_custom() {
    let registry = registry();
    let mapper = SchemaMapper::from_registry(&registry);
    let mut state = EditorState::from_registry(&registry);
    state.add_additional_field("Repositories");
    let mut hand_made = state.additional_fields[0].clone();
    hand_made.id = "title".to_string();
    hand_made.label = "Title".to_string();
    hand_made.custom_label = String::new();
    state.additional_fields.push(hand_made);

    let question = state
        .to_question(&mapper, Some(&registry.output_types))
        .unwrap();
    let headings: Vec<&str> = question.columns.iter().map(|c| c.heading.as_str()).collect();
    assert!(headings.contains(&"Repositories (custom)"));
    assert!(headings.contains(&"Title (custom)"));

    let restored = mapper.json_to_state(
        Some(&AnyParsedQuestion::from(question)),
        &registry.standard_fields,
    );
    let ids: Vec<&str> = restored.additional_fields.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["repositories_(custom)", "title_(custom)"]);
    for (before, after) in registry.standard_fields.iter().zip(&restored.standard_fields) {
        assert_eq!(before.enabled, after.enabled, "{}", before.id());
    }
}
