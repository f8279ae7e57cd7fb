//! Content security guard for Claude Code.
//!
//! Blocks file writes that contain dangerous dynamic-execution constructs or
//! likely hard-coded secrets. This hook runs before Write/Edit tool calls and
//! can deny the pending write.
//!
//! Exit behavior:
//!   - Exit 2 with JSON {"decision": "deny", "reason": ...} on stdout = block
//!   - Exit 0 with no output = allow, including any internal fault: the guard
//!     fails open rather than blocking legitimate work on its own bugs

#![forbid(unsafe_code)]

use content_security_guard::hook::{self, HookReadError};
use content_security_guard::inspector;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Hard cap on hook input size. Anything larger is treated like unreadable
/// input and allowed through (fail-open), so denials are best-effort above
/// this cap: a >16 MiB file is never inspected, even if it contains flagged
/// patterns.
const MAX_INPUT_BYTES: usize = 16 * 1024 * 1024;

/// Exit code reserved for "deny decision written to stdout".
const EXIT_DENY: i32 = 2;

/// Whether the pending write should be denied.
fn run() -> Result<bool, HookReadError> {
    let input = hook::read_hook_input(MAX_INPUT_BYTES)?;

    let Some(content) = hook::extract_content(&input) else {
        debug!("no reviewable content in tool_input, allowing");
        return Ok(false);
    };

    let issues = inspector::inspect(content);
    if issues.is_empty() {
        debug!(bytes = content.len(), "no issues found, allowing");
        return Ok(false);
    }

    debug!(issues = issues.len(), "denying write");
    hook::output_denial(&issues);
    Ok(true)
}

fn main() {
    // Silent unless a RUST_LOG filter is set; diagnostics go to stderr so
    // stdout stays reserved for the hook protocol.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    hook::configure_colors();

    match run() {
        Ok(true) => std::process::exit(EXIT_DENY),
        Ok(false) => {}
        Err(err) => {
            // Fail open: a hook fault must never block legitimate tool use.
            debug!(?err, "hook input error, allowing");
        }
    }
}
