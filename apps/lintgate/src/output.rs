//! Output rendering for gate results.
//!
//! Supports `human` (default) and `json`. Human output is the raw linter
//! output followed by a summary line and a PASSED/FAILED marker line.

use crate::models::LintResult;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && crate::utils::use_colors()
}

/// Print a gate result in the requested format.
pub fn print_result(res: &LintResult, output: &str) {
    match output {
        "json" => match serde_json::to_string_pretty(&compose_result_json(res)) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("{} {}", crate::utils::error_prefix(), e),
        },
        _ => {
            let color = use_colors(output);
            print!("{}", res.raw_output);
            if !res.raw_output.is_empty() && !res.raw_output.ends_with('\n') {
                println!();
            }
            let summary = summary_line(res);
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
            let marker = marker_line(res);
            if !color {
                println!("{}", marker);
            } else if res.passed() {
                println!("{}", marker.green().bold());
            } else {
                println!("{}", marker.red().bold());
            }
        }
    }
}

/// `Found N issue(s)`, plus the threshold when one is set.
pub fn summary_line(res: &LintResult) -> String {
    match res.threshold {
        Some(t) => format!("Found {} issue(s) (threshold: {})", res.issue_count, t),
        None => format!("Found {} issue(s)", res.issue_count),
    }
}

/// `PASSED`, or `FAILED: ` followed by the gate's failure message.
pub fn marker_line(res: &LintResult) -> String {
    match crate::gate::decide(res) {
        Ok(()) => "PASSED".to_string(),
        Err(e) => format!("FAILED: {}", e),
    }
}

/// Compose the JSON object (pure) for testing/snapshot purposes.
pub fn compose_result_json(res: &LintResult) -> JsonVal {
    json!({
        "issue_count": res.issue_count,
        "threshold": res.threshold,
        "exceeded": res.exceeded,
        "passed": res.passed(),
        "diagnostics": res.diagnostics,
        "summary": res.summary,
        "raw_output": res.raw_output,
    })
}
