use std::process::ExitCode;

/// What a command prints and the code the process exits with.
#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}
impl CommandResult {
    /// A failed command whose explanation goes to stderr.
    pub fn failure(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    pub fn success(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }

    /// A report on stdout whose exit code reflects whether everything it
    /// lists passed.
    pub fn report(all_passed: bool, report: String) -> Self {
        Self {
            exit_code: if all_passed { ExitCode::SUCCESS } else { ExitCode::FAILURE },
            stderr: None,
            stdout: Some(report),
        }
    }
}
