//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(
    name = "lintgate",
    version,
    about = "Run a linter and fail when it reports too many issues",
    long_about = "LintGate runs `<linter> check` over the target directories, prints the linter output, counts diagnostic lines (`path:line:col: CODE message`) and fails when the count exceeds --fail-under.\n\nConfiguration precedence: CLI > lintgate.toml > defaults.",
    after_help = "Examples:\n  lintgate\n  lintgate -f 10 src tests\n  lintgate --fix --unsafe-fix -- app tests\n  lintgate --output json --fail-under 0"
)]
/// Command-line options for a single gate run.
pub struct Cli {
    #[arg(
        short = 'f',
        long = "fail-under",
        value_name = "N",
        help = "Fail when more than N issues are reported"
    )]
    pub fail_under: Option<usize>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Forward --fix to the linter")]
    pub fix: bool,
    #[arg(
        long = "unsafe-fix",
        visible_alias = "unsafe-fixes",
        alias = "unsafe",
        action = clap::ArgAction::SetTrue,
        help = "Also apply unsafe fixes (implies --fix)"
    )]
    pub unsafe_fix: bool,
    #[arg(long, value_name = "CMD", help = "Linter program (default: ruff)")]
    pub linter: Option<String>,
    #[arg(long, value_name = "DIR", help = "Repository root (default: current dir)")]
    pub repo_root: Option<String>,
    #[arg(
        long,
        value_parser = ["human", "json"],
        help = "Output mode: human|json (default: human)"
    )]
    pub output: Option<String>,
    #[arg(short, long, action = clap::ArgAction::SetTrue, help = "Print the linter command before running it")]
    pub verbose: bool,
    #[arg(value_name = "DIR", help = "Target directories (default: src tests)")]
    pub targets: Vec<String>,
}

/// Parse arguments without exiting the process.
pub fn parse_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
