//! Command-line interface layer.
//!
//! ## Module Structure
//!
//! - `args`: Flag definitions
//! - `exit_status`: Process exit codes
//! - `json`: `--json` output
//! - `report`: Text report and warnings

use std::process::ExitCode;

use anyhow::Result;

pub mod args;
pub mod exit_status;
pub mod json;
pub mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use report::ReportOptions;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let status = run::run(args)?;
    Ok(status.into())
}
