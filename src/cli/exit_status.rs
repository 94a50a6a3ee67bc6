use std::process::ExitCode;

/// Exit status of a run.
///
/// - `Success` (0): code was generated, or there was nothing to generate
/// - `Error` (1): the run failed (missing library, parse error, config error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run completed.
    Success,
    /// Run failed before producing output.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}
