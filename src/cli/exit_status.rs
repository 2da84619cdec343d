use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): the output file was written
/// - `Failure` (1): the command line was rejected (wrong file extension)
/// - `Error` (2): an I/O, config or interpreter failure
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The output file was written.
    Success,
    /// The command line was rejected.
    Failure,
    /// Command failed due to an internal error.
    Error,
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
