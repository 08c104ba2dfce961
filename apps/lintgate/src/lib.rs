//! LintGate core library.
//!
//! Runs an external linter (`ruff` by default) over a set of target
//! directories, counts the diagnostic lines in its output and gates on a
//! failure threshold.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `diagnostics`: Diagnostic-line matching, counting and parsing.
//! - `runner`: The `Linter` seam and the subprocess implementation.
//! - `gate`: Threshold decision and the end-to-end run.
//! - `models`: Invocation and result data models.
//! - `output`: Human/JSON printers.
//! - `error`: Failure kinds and exit codes.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod gate;
pub mod models;
pub mod output;
pub mod runner;
pub mod utils;
