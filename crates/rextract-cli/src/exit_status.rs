//! Exit status mapping for the `rextract` binary.

use std::process::ExitCode;

/// Exit status for a batch run.
///
/// - `Success` (0): every unit was analyzed and reported
/// - `UnitFailure` (1): at least one unit could not be analyzed; the caller
///   may retry those units with an alternate parser/dialect
/// - `Error` (2): the run itself failed before any units were processed
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    UnitFailure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::UnitFailure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
