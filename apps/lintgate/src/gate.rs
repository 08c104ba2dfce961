//! The gate pipeline: parse arguments, resolve config, run the linter,
//! count, decide, and map the outcome to an exit code.

use crate::cli;
use crate::config::{self, Effective};
use crate::diagnostics::{count_issues, parse_output, summarize};
use crate::error::{GateError, Result, FAILURE, SUCCESS};
use crate::models::{LintInvocation, LintResult};
use crate::output;
use crate::runner::Linter;
use crate::utils;
use clap::error::ErrorKind;
use std::ffi::OsString;

/// Build a `LintResult` from captured output and an optional threshold.
pub fn evaluate(raw_output: String, threshold: Option<usize>) -> LintResult {
    let issue_count = count_issues(&raw_output);
    let diagnostics = parse_output(&raw_output);
    debug_assert_eq!(issue_count, diagnostics.len());
    let summary = summarize(&diagnostics);
    LintResult {
        exceeded: threshold.is_some_and(|t| issue_count > t),
        raw_output,
        issue_count,
        threshold,
        diagnostics,
        summary,
    }
}

/// Turn a result into the gate decision. Equal-to-threshold passes.
pub fn decide(result: &LintResult) -> Result<()> {
    match result.threshold {
        Some(threshold) if result.exceeded => Err(GateError::ThresholdExceeded {
            count: result.issue_count,
            threshold,
        }),
        _ => Ok(()),
    }
}

/// Run the linter once and evaluate its output.
pub fn run_gate(invocation: &LintInvocation, linter: &dyn Linter) -> Result<LintResult> {
    let raw = linter.run(invocation)?;
    Ok(evaluate(raw, invocation.fail_threshold))
}

/// Full CLI entry: returns the process exit code.
pub fn run<I, T>(args: I, linter: &dyn Linter) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match cli::parse_from(args) {
        Ok(c) => c,
        Err(e) => return report_parse_error(e),
    };
    let eff = match config::resolve_effective(&cli) {
        Ok(eff) => eff,
        Err(e) => {
            report_error(&e);
            return e.exit_code();
        }
    };
    announce(&eff);
    let result = match run_gate(&eff.invocation, linter) {
        Ok(r) => r,
        Err(e) => {
            report_error(&e);
            return e.exit_code();
        }
    };
    output::print_result(&result, &eff.output);
    match decide(&result) {
        Ok(()) => SUCCESS,
        Err(e) => e.exit_code(),
    }
}

fn report_parse_error(err: clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            SUCCESS
        }
        _ => {
            // clap's rendering already carries the usage line
            let _ = err.print();
            FAILURE
        }
    }
}

fn report_error(err: &GateError) {
    eprintln!("{} {}", utils::error_prefix(), err);
}

fn announce(eff: &Effective) {
    if eff.output == "json" {
        return;
    }
    if !eff.config_found {
        eprintln!(
            "{} No lintgate.toml found; using defaults.",
            utils::note_prefix()
        );
    }
    if eff.verbose {
        eprintln!(
            "{} Running `{}` in {}",
            utils::info_prefix(),
            eff.invocation.display_command(),
            eff.repo_root.to_string_lossy()
        );
    }
}
