use super::strategy::arb_model;
use pomcheck::validate::{effective_result, raw_result};
use pomcheck::{Model, Severity, ValidationLevel, ValidationRequest, ValidationResult};
use proptest::prelude::*;

fn run(model: &Model, level: ValidationLevel) -> ValidationResult {
    let request = ValidationRequest::new().with_level(level);
    let mut result = raw_result(model, &request);
    result
        .diagnostics
        .extend(effective_result(model, &request).diagnostics);
    result
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    // Raising the level never hides a violation and never downgrades one.
    #[test]
    fn stricter_levels_report_at_least_as_much(model in arb_model()) {
        let results: Vec<ValidationResult> =
            ValidationLevel::ALL.iter().map(|&level| run(&model, level)).collect();
        for pair in results.windows(2) {
            prop_assert!(pair[0].diagnostics.len() <= pair[1].diagnostics.len());
            let blocking = |r: &ValidationResult| r.count(Severity::Fatal) + r.count(Severity::Error);
            prop_assert!(blocking(&pair[0]) <= blocking(&pair[1]));
        }
    }

    // Fatal diagnostics do not depend on the level.
    #[test]
    fn fatals_are_level_independent(model in arb_model()) {
        let minimal = run(&model, ValidationLevel::Minimal);
        for level in ValidationLevel::ALL {
            let result = run(&model, level);
            prop_assert_eq!(result.fatals(), minimal.fatals());
        }
    }

    // A model is valid under the legacy tier whenever it is valid under the
    // strict one.
    #[test]
    fn strict_validity_implies_legacy_validity(model in arb_model()) {
        if run(&model, ValidationLevel::STRICT).is_valid() {
            prop_assert!(run(&model, ValidationLevel::LEGACY).is_valid());
        }
    }
}
