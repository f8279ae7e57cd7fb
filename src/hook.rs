//! Claude Code hook protocol handling.
//!
//! This module handles the JSON input/output for the Claude Code `PreToolUse`
//! hook. It parses incoming hook requests for file-writing tools and formats
//! the denial response.

use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::io::{self, IsTerminal, Read, Write};

/// Input structure from Claude Code's `PreToolUse` hook.
#[derive(Debug, Deserialize)]
pub struct HookInput {
    /// Tool-specific input parameters.
    pub tool_input: Option<ToolInput>,
}

/// Tool-specific input carrying the text about to be written.
#[derive(Debug, Deserialize)]
pub struct ToolInput {
    /// Full content of the file being created (Write tool).
    pub file_text: Option<String>,

    /// Segment being inserted into an existing file (Edit tool).
    pub new_str: Option<String>,
}

/// Output structure for denying a write.
#[derive(Debug, Serialize)]
pub struct HookOutput<'a> {
    /// The permission decision; this hook only ever emits "deny".
    pub decision: &'static str,

    /// Human-readable explanation: a header line followed by one indented
    /// line per issue.
    pub reason: Cow<'a, str>,
}

/// Header line introducing the issue list in the denial reason.
pub const DENIAL_HEADER: &str = "\u{1f512} Security issues detected:";

/// Error type for reading and parsing hook input.
#[derive(Debug)]
pub enum HookReadError {
    /// Failed to read from stdin.
    Io(io::Error),
    /// Input exceeded the configured size limit.
    InputTooLarge(usize),
    /// Failed to parse JSON input.
    Json(serde_json::Error),
}

/// Read and parse hook input from stdin.
///
/// # Errors
///
/// Returns [`HookReadError::Io`] if stdin cannot be read, [`HookReadError::Json`]
/// if the input is not valid hook JSON, or [`HookReadError::InputTooLarge`] if
/// the input exceeds `max_bytes`.
pub fn read_hook_input(max_bytes: usize) -> Result<HookInput, HookReadError> {
    let mut input = String::with_capacity(256);
    {
        let stdin = io::stdin();
        // Read up to limit + 1 to detect overflow
        let mut handle = stdin.lock().take(max_bytes as u64 + 1);
        handle
            .read_to_string(&mut input)
            .map_err(HookReadError::Io)?;
    }

    if input.len() > max_bytes {
        return Err(HookReadError::InputTooLarge(input.len()));
    }

    serde_json::from_str(&input).map_err(HookReadError::Json)
}

/// Extract the text under review from hook input.
///
/// Prefers the full file content over an inserted segment; the first
/// non-empty field wins. Returns `None` when there is nothing to inspect.
#[must_use]
pub fn extract_content(input: &HookInput) -> Option<&str> {
    let tool_input = input.tool_input.as_ref()?;
    [
        tool_input.file_text.as_deref(),
        tool_input.new_str.as_deref(),
    ]
    .into_iter()
    .flatten()
    .find(|text| !text.is_empty())
}

/// Configure colored output based on TTY detection.
pub fn configure_colors() {
    if std::env::var_os("NO_COLOR").is_some() || std::env::var_os("CSG_NO_COLOR").is_some() {
        colored::control::set_override(false);
        return;
    }

    if !io::stderr().is_terminal() {
        colored::control::set_override(false);
    }
}

/// Format the denial reason for the JSON output (plain text).
#[must_use]
pub fn format_denial_reason(issues: &[String]) -> String {
    let mut reason = String::from(DENIAL_HEADER);
    for issue in issues {
        reason.push('\n');
        reason.push_str("  - ");
        reason.push_str(issue);
    }
    reason
}

/// Print a human-visible warning to stderr.
fn print_blocked_warning(issues: &[String]) {
    let stderr = io::stderr();
    let mut handle = stderr.lock();

    let _ = writeln!(handle);
    let _ = writeln!(
        handle,
        "{} content contains security issues",
        "BLOCKED by csg:".red().bold()
    );
    for issue in issues {
        let _ = writeln!(handle, "  {} {}", "-".red(), issue.yellow());
    }
    let _ = writeln!(
        handle,
        "  {}",
        "Remove the flagged constructs, or load secrets from environment configuration."
            .bright_black()
    );
}

/// Output a denial response: human summary to stderr, JSON to stdout for the
/// hook protocol.
#[cold]
#[inline(never)]
pub fn output_denial(issues: &[String]) {
    print_blocked_warning(issues);

    let output = HookOutput {
        decision: "deny",
        reason: Cow::Owned(format_denial_reason(issues)),
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = serde_json::to_writer(&mut handle, &output);
    let _ = writeln!(handle);
}
