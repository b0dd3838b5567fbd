#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let once = name_case::normalise(data);
    let twice = name_case::normalise(&*once);
    assert_eq!(once, twice);
});
