use std::process::ExitCode;

use crate::core::CheckOutcome;

/// Exit status for the checker, following common conventions for linter tools.
///
/// - `Success` (0): catalogs and sources are in sync
/// - `Failure` (1): missing or unused translations were found
/// - `Error` (2): the check could not run (invalid configuration)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<&CheckOutcome> for ExitStatus {
    fn from(outcome: &CheckOutcome) -> Self {
        if outcome.has_issues() {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
