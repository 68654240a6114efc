use crate::config::FailOn;

/// Well-known exit codes of the lint task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskExitCode {
    /// No lints were found
    Ok,
    /// Lints with a severity of warning were reported (no errors)
    Warning,
    /// One or more errors were reported (and any number of warnings)
    Error,
    /// The directory of the output file could not be created
    OutputDir,
    /// Reporters were requested but the output is not machine readable
    Invalid,
}

impl TaskExitCode {
    pub const ALL: [TaskExitCode; 5] = [
        TaskExitCode::Ok,
        TaskExitCode::Warning,
        TaskExitCode::Error,
        TaskExitCode::OutputDir,
        TaskExitCode::Invalid,
    ];

    pub fn code(self) -> i32 {
        match self {
            TaskExitCode::Ok => 0,
            TaskExitCode::Warning => 1,
            TaskExitCode::Error => 2,
            TaskExitCode::OutputDir => 3,
            TaskExitCode::Invalid => 4,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|exit_code| exit_code.code() == code)
    }

    pub fn message(self) -> &'static str {
        match self {
            TaskExitCode::Ok => "No lints were found",
            TaskExitCode::Warning => "Lints with a severity of warning were reported (no errors)",
            TaskExitCode::Error => {
                "One or more errors were reported (and any number of warnings)"
            }
            TaskExitCode::OutputDir => "Output directory could not be created",
            TaskExitCode::Invalid => {
                "Extra lint reporters can be used only if the output format is \"json\"."
            }
        }
    }

    /// Exit codes the linter uses when it managed to lint at all
    pub fn is_lint_success(code: i32) -> bool {
        matches!(
            Self::from_code(code),
            Some(TaskExitCode::Ok | TaskExitCode::Warning | TaskExitCode::Error)
        )
    }

    /// Decide the outcome of a decoded report under a fail-on policy.
    ///
    /// `force` plays no part here; it only changes the linter's own exit code.
    pub fn from_policy(fail_on: FailOn, num_of_errors: usize, num_of_warnings: usize) -> Self {
        match fail_on {
            FailOn::Never => TaskExitCode::Ok,
            FailOn::Warning if num_of_errors > 0 => TaskExitCode::Error,
            FailOn::Warning if num_of_warnings > 0 => TaskExitCode::Warning,
            FailOn::Warning => TaskExitCode::Ok,
            FailOn::Error if num_of_errors > 0 => TaskExitCode::Error,
            FailOn::Error => TaskExitCode::Ok,
        }
    }
}

impl From<TaskExitCode> for i32 {
    fn from(exit_code: TaskExitCode) -> i32 {
        exit_code.code()
    }
}
