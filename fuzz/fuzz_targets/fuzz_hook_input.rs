//! Fuzz target for hook JSON input parsing.
//!
//! This fuzzes the JSON parsing that receives input from Claude Code's hook.
//! It tests for:
//! - Panics from malformed JSON
//! - Type confusion attacks
//! - Memory issues from deeply nested structures

#![no_main]

use libfuzzer_sys::fuzz_target;

use content_security_guard::hook::{HookInput, extract_content};

fuzz_target!(|data: &[u8]| {
    // Try to interpret as UTF-8 first (JSON is UTF-8)
    if let Ok(json_str) = std::str::from_utf8(data) {
        // Skip extremely large inputs
        if json_str.len() > 100_000 {
            return;
        }

        // Parsing and extraction should never panic
        if let Ok(input) = serde_json::from_str::<HookInput>(json_str) {
            let _ = extract_content(&input);
        }
    }

    // Also try parsing raw bytes (tests error handling)
    let _ = serde_json::from_slice::<HookInput>(data);
});
