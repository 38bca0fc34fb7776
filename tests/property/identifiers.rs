use pomcheck::validate::effective_result;
use pomcheck::{Model, ValidationRequest, is_valid_id};
use proptest::prelude::*;

fn with_group(group_id: &str) -> Model {
    Model {
        model_version: Some("4.0.0".into()),
        group_id: Some(group_id.to_string()),
        artifact_id: Some("app".into()),
        version: Some("1".into()),
        ..Model::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn valid_ids_are_accepted(id in "[A-Za-z0-9_.-]{1,24}") {
        prop_assert!(is_valid_id(&id));
        let result = effective_result(&with_group(&id), &ValidationRequest::strict());
        prop_assert!(result.is_empty(), "{:?}", result.diagnostics);
    }

    #[test]
    fn ids_with_foreign_characters_are_rejected(
        prefix in "[a-z]{1,6}",
        bad in "[/:$ @!+]",
        suffix in "[a-z]{0,6}",
    ) {
        let id = format!("{}{}{}", prefix, bad, suffix);
        prop_assert!(!is_valid_id(&id));
        let result = effective_result(&with_group(&id), &ValidationRequest::strict());
        prop_assert_eq!(
            result.errors(),
            vec![format!("'groupId' with value '{}' does not match a valid id pattern.", id)]
        );
    }

    #[test]
    fn arbitrary_text_never_panics(s in "\\PC{0,30}") {
        let _ = is_valid_id(&s);
        let _ = pomcheck::is_well_formed_version(&s);
        let _ = pomcheck::parse(&s);
    }
}
