use anyhow::Result;

pub use args::Arguments;
pub use exit_status::ExitStatus;

use crate::core::library::BOOTSTRAP_VUE;

mod args;
mod exit_status;
pub mod report;
pub mod run;

/// Run one generation and print its output.
///
/// Generated code goes to stdout, notes and warnings to stderr.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let outcome = run::run(args, &BOOTSTRAP_VUE)?;
    report::print(&outcome.result, BOOTSTRAP_VUE.package, outcome.verbose);
    Ok(ExitStatus::Success)
}
