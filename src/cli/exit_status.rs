use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, template written or up to date
/// - `Failure` (1): Command completed but the template is stale, or `init`
///   found an existing config
/// - `Error` (2): Command failed (I/O, traversal, invalid config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command completed but reported a problem.
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
