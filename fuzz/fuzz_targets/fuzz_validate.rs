#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pomcheck::validate::{effective_result, raw_result};
use pomcheck::{ValidationLevel, ValidationRequest};

#[derive(Arbitrary, Debug)]
struct Input {
    level: u8,
    descriptor: String,
}

fuzz_target!(|input: Input| {
    let model = match pomcheck::parse(&input.descriptor) {
        Ok(m) => m,
        Err(_) => return,
    };

    let level = ValidationLevel::ALL[input.level as usize % ValidationLevel::ALL.len()];
    let request = ValidationRequest::new().with_level(level);

    let raw = raw_result(&model, &request);
    let effective = effective_result(&model, &request);

    // Validation must be a pure function of (model, level).
    assert_eq!(raw, raw_result(&model, &request), "raw rules are not deterministic");
    assert_eq!(
        effective,
        effective_result(&model, &request),
        "effective rules are not deterministic"
    );

    for diagnostic in raw.diagnostics.iter().chain(&effective.diagnostics) {
        assert!(
            diagnostic.message.starts_with('\''),
            "message does not start with a field path: {:?}",
            diagnostic.message
        );
    }
});
