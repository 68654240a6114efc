//! tslint-runner - Run tslint and turn its outcome into a task exit code
//!
//! This crate provides functionality to:
//! - Describe a lint run with typed options (loaded from JSON or built in code)
//! - Generate a shell-safe tslint command line from those options
//! - Run the linter, decode its JSON report and hand it to reporters
//! - Map the report onto a task exit code using a fail-on policy
pub mod command;
pub mod config;
pub mod error;
pub mod report;
pub mod runners;
pub mod task;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Error, Result};

// Re-export main API components
pub use command::{CommandBuilder, TsLintCommand};
pub use config::{FailOn, InclusionList, TsLintOptions};
pub use report::{Finding, Report, Reporter, Severity};
pub use runners::{BufferedOutput, OutputStream, ProcessOutput, ProcessRunner, ShellProcessRunner};
pub use task::{TaskExitCode, TaskResult, TsLintRunTask};
