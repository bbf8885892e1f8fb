#![no_main]
use libfuzzer_sys::fuzz_target;

use fontdesc::{FaceName, FaceNamePolicy};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let truncated = FaceName::truncated(input);
    assert!(truncated.len_utf16() <= FaceName::CAPACITY, "truncated name over capacity");
    assert!(!truncated.as_str().contains('\0'), "truncated name kept a NUL");
    assert!(input.starts_with(truncated.as_str()), "truncation is not a prefix");

    // A strict build succeeds exactly when truncation would change nothing
    match FaceName::new(input, FaceNamePolicy::Reject) {
        Ok(strict) => assert_eq!(strict, truncated),
        Err(_) => assert_ne!(truncated.as_str(), input),
    }
});
