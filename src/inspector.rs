//! Content inspection against two static pattern sets.
//!
//! Pass one scans the whole content for dangerous dynamic-execution and
//! DOM-injection constructs. Pass two scans line by line for credential
//! keywords on assignment/key-value lines. Both passes are case-insensitive
//! substring checks; this is a textual heuristic, not a parser.

use aho_corasick::AhoCorasick;
use std::sync::LazyLock;

/// Constructs whose presence anywhere in reviewed text indicates an unsafe
/// dynamic-execution or injection sink. Order is the reporting order.
pub const DANGEROUS_PATTERNS: &[&str] = &[
    "eval(",
    "Function(",
    "innerHTML",
    "document.write(",
    "dangerouslySetInnerHTML",
    "__proto__",
    "constructor.prototype",
    "exec(",
];

/// Credential-related keywords that suggest a hard-coded secret when they
/// appear on a line with an `=` or `:` binding.
pub const SECRET_PATTERNS: &[&str] = &[
    "password",
    "secret",
    "api_key",
    "apikey",
    "token",
    "private_key",
    "access_key",
];

/// Runtime environment-variable lookups. A line reading its value from one
/// of these is configuration, not a hard-coded secret. Matched exactly
/// (case-sensitive), unlike the pattern sets.
const ENV_ACCESS_MARKERS: &[&str] = &["process.env", "import.meta.env"];

// Both automata are built over lowercased patterns and run against a
// `str::to_lowercase`-folded haystack, so non-ASCII casings such as the
// Kelvin sign U+212A fold to their plain letters and still match.
static DANGEROUS_MATCHER: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::new(DANGEROUS_PATTERNS.iter().map(|p| p.to_lowercase()))
        .expect("dangerous patterns should compile")
});

static SECRET_MATCHER: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::new(SECRET_PATTERNS.iter().map(|p| p.to_lowercase()))
        .expect("secret patterns should compile")
});

/// Which patterns of `matcher` occur in `haystack`, by pattern index.
///
/// Overlapping iteration so a match of one pattern never shadows another;
/// the whole pattern set is small, so a single automaton pass suffices.
fn pattern_presence(matcher: &AhoCorasick, pattern_count: usize, haystack: &str) -> Vec<bool> {
    let mut seen = vec![false; pattern_count];
    for mat in matcher.find_overlapping_iter(haystack) {
        seen[mat.pattern().as_usize()] = true;
    }
    seen
}

/// Whether a line plausibly binds a name to a value (`=` or `:` present).
fn has_binding_separator(line: &str) -> bool {
    memchr::memchr2(b'=', b':', line.as_bytes()).is_some()
}

/// Whether a trimmed line is a comment (`//`, `#`) or a block-comment
/// continuation (`*`, as in JSDoc bodies).
fn is_comment_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("//") || trimmed.starts_with('#') || trimmed.starts_with('*')
}

/// Inspect `content` and return one human-readable issue per match.
///
/// Dangerous-construct issues come first, in pattern order. Secret issues
/// follow, ordered by ascending 1-based line number and then pattern order.
/// Empty content yields an empty list. Pure; never fails.
#[must_use]
pub fn inspect(content: &str) -> Vec<String> {
    let mut issues = Vec::new();

    let seen = pattern_presence(
        &DANGEROUS_MATCHER,
        DANGEROUS_PATTERNS.len(),
        &content.to_lowercase(),
    );
    for (pattern, found) in DANGEROUS_PATTERNS.iter().zip(seen) {
        if found {
            issues.push(format!("Dangerous pattern detected: {pattern}"));
        }
    }

    for (index, line) in content.split('\n').enumerate() {
        if !has_binding_separator(line) {
            continue;
        }
        if ENV_ACCESS_MARKERS.iter().any(|marker| line.contains(marker)) {
            continue;
        }
        if is_comment_line(line) {
            continue;
        }

        // Each line is lowercased on its own, so issue line numbers are
        // unaffected by folds that change string length.
        let seen = pattern_presence(&SECRET_MATCHER, SECRET_PATTERNS.len(), &line.to_lowercase());
        for (pattern, found) in SECRET_PATTERNS.iter().zip(seen) {
            if found {
                issues.push(format!(
                    "Potential hard-coded secret at line {}: {pattern}",
                    index + 1
                ));
            }
        }
    }

    issues
}
