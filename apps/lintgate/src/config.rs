//! Configuration discovery and effective settings resolution.
//!
//! LintGate reads `lintgate.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config.
//! Defaults:
//! - `linter`: `ruff`
//! - `targets`: `["src", "tests"]`
//! - `fail_under`: unset (informational run)
//! - `output`: `human`
//! - `fix|unsafe_fix`: false
//!
//! Overrides precedence: CLI > config file > defaults. Positional targets
//! replace the configured list.

use crate::cli::Cli;
use crate::error::{GateError, Result};
use crate::models::{FixMode, LintInvocation, DEFAULT_LINTER, DEFAULT_TARGETS};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILES: [&str; 3] = ["lintgate.toml", "lintgate.yaml", "lintgate.yml"];

#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
/// Root configuration loaded from `lintgate.toml|yaml`.
pub struct GateConfig {
    pub linter: Option<String>,
    pub targets: Option<Vec<String>>,
    pub fail_under: Option<usize>,
    pub output: Option<String>,
    pub fix: Option<bool>,
    pub unsafe_fix: Option<bool>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the gate after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub config_found: bool,
    pub output: String,
    pub verbose: bool,
    pub invocation: LintInvocation,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `lintgate.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `GateConfig` from `lintgate.toml` or `lintgate.yaml|yml` if present.
///
/// A missing file yields `Ok(None)`; a file that cannot be read or parsed
/// is a usage error.
pub fn load_config(root: &Path) -> Result<Option<GateConfig>> {
    let toml_path = root.join("lintgate.toml");
    if toml_path.exists() {
        let s = read_config(&toml_path)?;
        let cfg: GateConfig = toml::from_str(&s).map_err(|e| invalid(&toml_path, e))?;
        return Ok(Some(cfg));
    }
    for yml in ["lintgate.yaml", "lintgate.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = read_config(&p)?;
            let cfg: GateConfig = serde_yaml::from_str(&s).map_err(|e| invalid(&p, e))?;
            return Ok(Some(cfg));
        }
    }
    Ok(None)
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| invalid(path, e))
}

fn invalid(path: &Path, err: impl std::fmt::Display) -> GateError {
    GateError::Usage(format!(
        "invalid config {}: {}",
        path.to_string_lossy(),
        err
    ))
}

/// Resolve the directory the root search starts from: `--repo-root`
/// (default `.`) taken relative to `cwd`, canonicalized so the upward walk
/// sees real ancestors. It must be an existing directory.
pub fn resolve_start(cwd: &Path, repo_root: Option<&str>) -> Result<PathBuf> {
    let requested = cwd.join(repo_root.unwrap_or("."));
    let start = requested.canonicalize().map_err(|e| {
        GateError::Usage(format!(
            "repo root {} is not a directory: {}",
            requested.to_string_lossy(),
            e
        ))
    })?;
    if !start.is_dir() {
        return Err(GateError::Usage(format!(
            "repo root {} is not a directory",
            start.to_string_lossy()
        )));
    }
    Ok(start)
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(cli: &Cli) -> Result<Effective> {
    let cwd = std::env::current_dir()
        .map_err(|e| GateError::Usage(format!("cannot read current directory: {}", e)))?;
    resolve_effective_from(&cwd, cli)
}

/// Same as `resolve_effective`, with relative paths taken from `cwd`.
pub fn resolve_effective_from(cwd: &Path, cli: &Cli) -> Result<Effective> {
    let start = resolve_start(cwd, cli.repo_root.as_deref())?;
    let repo_root = detect_repo_root(&start);
    let loaded = load_config(&repo_root)?;
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();

    let output = cli
        .output
        .clone()
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());
    if output != "human" && output != "json" {
        return Err(GateError::Usage(format!(
            "output must be 'human' or 'json', got '{}'",
            output
        )));
    }

    let linter = cli
        .linter
        .clone()
        .or(cfg.linter)
        .unwrap_or_else(|| DEFAULT_LINTER.to_string());
    if linter.trim().is_empty() {
        return Err(GateError::Usage("linter must not be empty".into()));
    }

    let target_directories = if !cli.targets.is_empty() {
        cli.targets.clone()
    } else {
        cfg.targets
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TARGETS.iter().map(|s| s.to_string()).collect())
    };

    let mut extra_flags = Vec::new();
    if cli.fix || cfg.fix.unwrap_or(false) {
        extra_flags.push(FixMode::Fix);
    }
    if cli.unsafe_fix || cfg.unsafe_fix.unwrap_or(false) {
        extra_flags.push(FixMode::UnsafeFix);
    }

    let fail_threshold = cli.fail_under.or(cfg.fail_under);

    Ok(Effective {
        invocation: LintInvocation {
            linter,
            working_dir: repo_root.clone(),
            target_directories,
            extra_flags,
            fail_threshold,
        },
        repo_root,
        config_found,
        output,
        verbose: cli.verbose,
    })
}
