//! Linter execution.
//!
//! `ExternalLinter` spawns `<linter> check [fix-flags] [targets...]` in the
//! repository root and returns stdout followed by stderr. The linter's own
//! exit status is ignored: a non-zero exit usually just means it found
//! issues, and the gate decides on the counted lines alone.

use crate::error::{GateError, Result};
use crate::models::LintInvocation;
use std::process::{Command, Stdio};

/// Something that can run a lint invocation and hand back its output.
pub trait Linter {
    fn run(&self, invocation: &LintInvocation) -> Result<String>;
}

/// Runs the linter as a child process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExternalLinter;

impl Linter for ExternalLinter {
    fn run(&self, invocation: &LintInvocation) -> Result<String> {
        let output = Command::new(&invocation.linter)
            .args(invocation.linter_args())
            .current_dir(&invocation.working_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| GateError::Launch {
                program: invocation.linter.clone(),
                source,
            })?;
        Ok(merge_output(&output.stdout, &output.stderr))
    }
}

/// Combine captured streams into one text blob, stdout first.
pub fn merge_output(stdout: &[u8], stderr: &[u8]) -> String {
    let mut combined = String::from_utf8_lossy(stdout).into_owned();
    if !stderr.is_empty() {
        if !combined.is_empty() && !combined.ends_with('\n') {
            combined.push('\n');
        }
        combined.push_str(&String::from_utf8_lossy(stderr));
    }
    combined
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::count_issues;
    use std::path::Path;
    use tempfile::tempdir;

    fn invocation(linter: &str, dir: &Path) -> LintInvocation {
        LintInvocation {
            linter: linter.to_string(),
            working_dir: dir.to_path_buf(),
            target_directories: vec!["src".into(), "tests".into()],
            extra_flags: vec![],
            fail_threshold: None,
        }
    }

    #[test]
    fn test_merge_output_keeps_line_boundaries() {
        assert_eq!(merge_output(b"a:1:1: E1 x", b"b:2:2: E2 y\n"), "a:1:1: E1 x\nb:2:2: E2 y\n");
        assert_eq!(merge_output(b"", b"err\n"), "err\n");
        assert_eq!(merge_output(b"out\n", b""), "out\n");
    }

    #[test]
    fn test_missing_program_is_launch_error() {
        let dir = tempdir().unwrap();
        let inv = invocation("lintgate-no-such-linter-binary", dir.path());
        let err = ExternalLinter.run(&inv).unwrap_err();
        assert!(matches!(err, GateError::Launch { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_captures_both_streams_despite_nonzero_exit() {
        // `sh check src tests` runs the `check` script with the targets as arguments
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("check"),
            "echo \"targets: $*\"\n\
             echo 'src/a.py:1:1: F401 `os` imported but unused'\n\
             echo 'tests/b.py:2:5: E501 Line too long' >&2\n\
             exit 1\n",
        )
        .unwrap();

        let out = ExternalLinter.run(&invocation("sh", dir.path())).unwrap();
        assert!(out.contains("targets: src tests"));
        assert_eq!(count_issues(&out), 2);
    }
}
