#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let collapsed = name_case::normalise_whitespace_to_empty(data);
    assert_eq!(collapsed.trim(), collapsed);
    assert!(!collapsed.contains("  "));
    name_case::is_normalised(data);
});
