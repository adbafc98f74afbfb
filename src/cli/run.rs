use anyhow::Result;

use super::{
    args::Arguments,
    exit_status::ExitStatus,
    json::render_json,
    report::{print_warnings, report},
};
use crate::core::CheckContext;

/// Run one check and print its results.
///
/// # Returns
/// - `Ok(ExitStatus)`: `Success` when in sync, `Failure` when issues were found
/// - `Err` if the check cannot start (invalid configuration)
pub fn run(args: Arguments) -> Result<ExitStatus> {
    let ctx = CheckContext::new(&args.root)?;
    let outcome = ctx.run()?;

    print_warnings(&outcome);

    if args.json {
        println!("{}", render_json(&outcome)?);
    } else {
        report(&outcome, args.report_options());
    }

    Ok(ExitStatus::from(&outcome))
}
