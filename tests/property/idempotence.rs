use super::strategy::arb_model;
use pomcheck::validate::{effective_result, raw_result};
use pomcheck::{Diagnostic, ValidationLevel, ValidationRequest, validate_effective, validate_raw};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    // Same model, same level: same diagnostics in the same order.
    #[test]
    fn validation_is_deterministic(model in arb_model(), level in prop::sample::select(ValidationLevel::ALL.to_vec())) {
        let request = ValidationRequest::new().with_level(level);
        prop_assert_eq!(raw_result(&model, &request), raw_result(&model, &request));
        prop_assert_eq!(effective_result(&model, &request), effective_result(&model, &request));
    }

    // The model is read-only to the validators.
    #[test]
    fn validation_does_not_modify_the_model(model in arb_model()) {
        let before = model.clone();
        let request = ValidationRequest::new().with_level(ValidationLevel::Maven31);
        let _ = raw_result(&model, &request);
        let _ = effective_result(&model, &request);
        prop_assert_eq!(before, model);
    }

    // Any sink sees the same stream as ValidationResult.
    #[test]
    fn sinks_agree(model in arb_model()) {
        let request = ValidationRequest::strict();
        let mut sink: Vec<Diagnostic> = Vec::new();
        validate_raw(&model, &request, &mut sink);
        validate_effective(&model, &request, &mut sink);

        let mut expected = raw_result(&model, &request).diagnostics;
        expected.extend(effective_result(&model, &request).diagnostics);
        prop_assert_eq!(sink, expected);
    }
}
