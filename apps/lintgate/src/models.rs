//! Shared data models for a single gate run.
//!
//! `LintInvocation` is built once from CLI flags and config; `LintResult` is
//! produced once from the captured linter output and consumed by the printer
//! and the exit decision.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Default directories linted when neither CLI nor config names any.
pub const DEFAULT_TARGETS: [&str; 2] = ["src", "tests"];

/// Default linter program.
pub const DEFAULT_LINTER: &str = "ruff";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
/// Fix modes forwarded to the linter.
pub enum FixMode {
    Fix,
    UnsafeFix,
}

impl FixMode {
    /// Flags forwarded to the linter for this mode. Unsafe fixing only
    /// takes effect together with `--fix`, so it requests both.
    pub fn linter_flags(self) -> &'static [&'static str] {
        match self {
            FixMode::Fix => &["--fix"],
            FixMode::UnsafeFix => &["--fix", "--unsafe-fixes"],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Everything needed to run the linter once.
pub struct LintInvocation {
    pub linter: String,
    pub working_dir: PathBuf,
    pub target_directories: Vec<String>,
    pub extra_flags: Vec<FixMode>,
    pub fail_threshold: Option<usize>,
}

impl LintInvocation {
    /// Arguments passed to the linter: `check`, fix flags, then targets.
    ///
    /// Fix flags are deduplicated so `--fix --unsafe-fix` forwards
    /// `--fix --unsafe-fixes` exactly once each.
    pub fn linter_args(&self) -> Vec<String> {
        let mut args = vec!["check".to_string()];
        let mut modes = self.extra_flags.clone();
        modes.sort();
        modes.dedup();
        for mode in modes {
            for flag in mode.linter_flags() {
                if !args.iter().any(|a| a == flag) {
                    args.push((*flag).to_string());
                }
            }
        }
        args.extend(self.target_directories.iter().cloned());
        args
    }

    /// Human-readable command line, used by `--verbose`.
    pub fn display_command(&self) -> String {
        let mut parts = vec![self.linter.clone()];
        parts.extend(self.linter_args());
        parts.join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One diagnostic line parsed out of the linter output.
pub struct Diagnostic {
    pub path: String,
    pub line: usize,
    pub column: usize,
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Per-code tally of diagnostics, ordered by code.
pub struct Summary {
    pub by_code: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Serialize)]
/// Outcome of one gate run.
pub struct LintResult {
    pub raw_output: String,
    pub issue_count: usize,
    pub threshold: Option<usize>,
    pub exceeded: bool,
    pub diagnostics: Vec<Diagnostic>,
    pub summary: Summary,
}

impl LintResult {
    pub fn passed(&self) -> bool {
        !self.exceeded
    }
}
