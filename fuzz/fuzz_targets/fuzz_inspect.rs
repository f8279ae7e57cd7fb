//! Fuzz target for the content inspector.
//!
//! The inspector is a pure function of its input and must never panic on any
//! UTF-8 string, including pathological line counts and pattern fragments.

#![no_main]

use libfuzzer_sys::fuzz_target;

use content_security_guard::inspector::inspect;

fuzz_target!(|content: &str| {
    if content.len() > 100_000 {
        return;
    }

    let issues = inspect(content);

    // Dangerous-construct issues always precede secret issues
    let mut seen_secret = false;
    for issue in &issues {
        if issue.starts_with("Potential hard-coded secret") {
            seen_secret = true;
        } else {
            assert!(!seen_secret, "dangerous issue after secret issue");
        }
    }
});
