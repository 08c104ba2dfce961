//! LintGate CLI binary entry point.
//! Delegates to the library pipeline and exits with its status.

use lintgate::gate;
use lintgate::runner::ExternalLinter;

fn main() {
    let code = gate::run(std::env::args_os(), &ExternalLinter);
    std::process::exit(code);
}
