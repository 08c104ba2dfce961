//! Diagnostic-line recognition for linter output.
//!
//! A diagnostic line looks like `path:line:column: CODE message`, where
//! `CODE` is one uppercase letter followed by digits (`E501`, `F401`). Every
//! other line is ignored. This format is owned by the linter; a change on its
//! side changes what gets counted here.

use crate::models::{Diagnostic, Summary};
use regex::Regex;
use std::sync::OnceLock;

const DIAGNOSTIC_PATTERN: &str =
    r"^(?P<path>.+?):(?P<line>\d+):(?P<column>\d+): (?P<code>[A-Z]\d+)(?:\s+(?P<message>.*))?$";

static DIAGNOSTIC_REGEX: OnceLock<Regex> = OnceLock::new();

fn diagnostic_regex() -> &'static Regex {
    DIAGNOSTIC_REGEX.get_or_init(|| Regex::new(DIAGNOSTIC_PATTERN).expect("invalid regex pattern"))
}

/// Whether a single line is a diagnostic line.
pub fn is_diagnostic_line(line: &str) -> bool {
    diagnostic_regex().is_match(line)
}

/// Count diagnostic lines in `output`.
pub fn count_issues(output: &str) -> usize {
    output.lines().filter(|l| is_diagnostic_line(l)).count()
}

/// Parse one line into a `Diagnostic`, or `None` when it does not match.
pub fn parse_line(line: &str) -> Option<Diagnostic> {
    let caps = diagnostic_regex().captures(line)?;
    Some(Diagnostic {
        path: caps["path"].to_string(),
        // Digit runs too long for usize still count as a diagnostic
        line: caps["line"].parse().unwrap_or(usize::MAX),
        column: caps["column"].parse().unwrap_or(usize::MAX),
        code: caps["code"].to_string(),
        message: caps
            .name("message")
            .map(|m| m.as_str().trim_end().to_string())
            .unwrap_or_default(),
    })
}

/// Parse every diagnostic line in `output`, in output order.
pub fn parse_output(output: &str) -> Vec<Diagnostic> {
    output.lines().filter_map(parse_line).collect()
}

/// Tally diagnostics by code.
pub fn summarize(diagnostics: &[Diagnostic]) -> Summary {
    let mut summary = Summary::default();
    for d in diagnostics {
        *summary.by_code.entry(d.code.clone()).or_insert(0) += 1;
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
src/api/events.py:56:5: C901 `__init__` is too complex (12 > 10)
src/core/config.py:42:9: N802 Function name `LOG_CONFIG` should be lowercase
tests/test_users.py:3:1: F401 [*] `os` imported but unused
Found 3 errors.
[*] 1 fixable with the `--fix` option.
";

    #[test]
    fn test_counts_only_diagnostic_lines() {
        assert_eq!(count_issues(SAMPLE), 3);
    }

    #[test]
    fn test_empty_output_counts_zero() {
        assert_eq!(count_issues(""), 0);
        assert!(parse_output("").is_empty());
    }

    #[test]
    fn test_k_matching_lines_count_k() {
        for k in 0..6 {
            let out: String = (0..k)
                .map(|i| format!("src/m{i}.py:{}:1: E501 Line too long\n", i + 1))
                .collect();
            assert_eq!(count_issues(&out), k);
        }
    }

    #[test]
    fn test_rejects_non_diagnostic_shapes() {
        assert!(!is_diagnostic_line("All checks passed!"));
        assert!(!is_diagnostic_line("src/a.py:1:1: e501 lowercase code"));
        assert!(!is_diagnostic_line("src/a.py:1: E501 missing column"));
        assert!(!is_diagnostic_line("src/a.py:1:1:E501 no space"));
        assert!(!is_diagnostic_line("src/a.py:1:1: ARG001 multi-letter prefix"));
        assert!(!is_diagnostic_line("src/a.py:1:1: E501x glued suffix"));
        assert!(!is_diagnostic_line("  src/a.py:1:1 no colon after column"));
    }

    #[test]
    fn test_leading_whitespace_is_part_of_the_path() {
        let d = parse_line("  src/a.py:1:1: E501 Line too long").unwrap();
        assert_eq!(d.path, "  src/a.py");
        assert!(!is_diagnostic_line("  |   ^ E501"));
    }

    #[test]
    fn test_accepts_code_without_message_and_crlf() {
        assert!(is_diagnostic_line("src/a.py:1:1: W291"));
        assert_eq!(count_issues("src/a.py:1:1: E501 long\r\nsrc/b.py:2:2: E501 long\r\n"), 2);
    }

    #[test]
    fn test_parse_line_fields() {
        let d = parse_line("C:\\repo\\src\\a.py:10:4: E711 Comparison to `None`").unwrap();
        assert_eq!(d.path, "C:\\repo\\src\\a.py");
        assert_eq!(d.line, 10);
        assert_eq!(d.column, 4);
        assert_eq!(d.code, "E711");
        assert_eq!(d.message, "Comparison to `None`");
    }

    #[test]
    fn test_parse_matches_count_and_summary() {
        let diags = parse_output(SAMPLE);
        assert_eq!(diags.len(), count_issues(SAMPLE));
        let summary = summarize(&diags);
        assert_eq!(summary.by_code.get("C901"), Some(&1));
        assert_eq!(summary.by_code.get("F401"), Some(&1));
        assert_eq!(summary.by_code.keys().cloned().collect::<Vec<_>>(), ["C901", "F401", "N802"]);
    }
}
