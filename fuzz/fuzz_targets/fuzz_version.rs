#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);

    let well_formed = pomcheck::is_well_formed_version(&s);
    if pomcheck::has_expression(&s) {
        assert!(!well_formed, "expression accepted as a version: {:?}", s);
    }
    let _ = pomcheck::is_absolute_path(&s);
    let _ = pomcheck::is_valid_id(&s);
});
