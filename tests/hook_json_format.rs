//! Tests for the stability of the deny JSON emitted on stdout.
//!
//! The orchestrator parses this document; its shape must never change
//! unexpectedly. The contract is a flat object with exactly two fields:
//! `decision` (always "deny") and `reason` (header line plus one
//! `  - ` line per issue).

use assert_cmd::Command;
use serde_json::Value;

/// Run csg over `input` and return (stdout, exit code).
fn run_hook(input: &str) -> (String, i32) {
    let output = Command::cargo_bin("csg")
        .expect("csg binary should be built")
        .write_stdin(input.to_string())
        .output()
        .expect("failed to run csg");
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

fn deny_json(file_text: &str) -> Value {
    let input = serde_json::json!({
        "tool_input": { "file_text": file_text }
    })
    .to_string();
    let (stdout, code) = run_hook(&input);
    assert_eq!(code, 2, "expected a deny for content: {file_text}");
    serde_json::from_str(&stdout).expect("stdout should be a single JSON document")
}

#[test]
fn deny_output_is_a_flat_two_field_object() {
    let json = deny_json("eval(code)");
    let object = json.as_object().expect("deny output should be an object");
    assert_eq!(object.len(), 2);
    assert_eq!(json["decision"], "deny");
    assert!(json["reason"].is_string());
}

#[test]
fn deny_output_is_one_line_of_json() {
    let input = r#"{"tool_input":{"file_text":"eval(code)"}}"#;
    let (stdout, code) = run_hook(input);
    assert_eq!(code, 2);
    assert_eq!(stdout.trim_end_matches('\n').lines().count(), 1);
}

#[test]
fn reason_starts_with_the_fixed_header() {
    let json = deny_json("eval(code)");
    let reason = json["reason"].as_str().unwrap();
    assert!(
        reason.starts_with("\u{1f512} Security issues detected:"),
        "unexpected header in reason: {reason}"
    );
}

#[test]
fn reason_lists_each_issue_on_an_indented_dash_line() {
    let json = deny_json("eval(code)\ntoken = \"t\"");
    let reason = json["reason"].as_str().unwrap();
    let lines: Vec<&str> = reason.lines().collect();

    assert_eq!(lines.len(), 3);
    for line in &lines[1..] {
        assert!(line.starts_with("  - "), "issue line not indented: {line}");
    }
    assert_eq!(lines[1], "  - Dangerous pattern detected: eval(");
    assert_eq!(lines[2], "  - Potential hard-coded secret at line 2: token");
}

#[test]
fn reason_orders_dangerous_issues_before_secret_issues() {
    // The secret sits on line 1, the dangerous construct at the end of the
    // content; the dangerous pass still reports first.
    let json = deny_json("password = \"hunter2\"\ndocument.write(x)");
    let reason = json["reason"].as_str().unwrap();
    let dangerous = reason.find("Dangerous pattern detected").unwrap();
    let secret = reason.find("Potential hard-coded secret").unwrap();
    assert!(dangerous < secret);
}

#[test]
fn reason_reports_multiple_secrets_on_one_line_in_pattern_order() {
    let json = deny_json("apikey=X token=Y");
    let reason = json["reason"].as_str().unwrap();
    let lines: Vec<&str> = reason.lines().collect();
    assert_eq!(
        &lines[1..],
        &[
            "  - Potential hard-coded secret at line 1: apikey",
            "  - Potential hard-coded secret at line 1: token",
        ]
    );
}

#[test]
fn reason_preserves_pattern_casing_from_the_list() {
    let json = deny_json("x = new function(body)");
    let reason = json["reason"].as_str().unwrap();
    assert!(reason.contains("Dangerous pattern detected: Function("));
}
