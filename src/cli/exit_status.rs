use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed and nothing needs attention
/// - `Failure` (1): Command completed but reported problems (unknown or unreadable language, ...)
/// - `Error` (2): Command failed due to internal error (missing language folder, config error, I/O error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
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
