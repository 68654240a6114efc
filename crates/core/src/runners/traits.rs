//! Seams between the lint task and the outside world

use crate::{command::TsLintCommand, error::Result};

/// What a finished linter process left behind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, `-1` when the process was terminated by a signal
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn new(exit_code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }
}

/// Executes a linter command and waits for it to finish
pub trait ProcessRunner {
    /// Run the command synchronously, capturing exit code and both output streams
    fn run(&self, command: &TsLintCommand) -> Result<ProcessOutput>;
}

/// Sink for the task's own textual output
pub trait OutputStream {
    fn write(&mut self, text: &str) -> Result<()>;
}

impl<T: OutputStream + ?Sized> OutputStream for Box<T> {
    fn write(&mut self, text: &str) -> Result<()> {
        (**self).write(text)
    }
}
