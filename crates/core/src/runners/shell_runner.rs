use std::process::Command;
use tracing::debug;

use super::traits::{ProcessOutput, ProcessRunner};
use crate::{
    command::TsLintCommand,
    error::{Error, Result},
};

/// Runs commands through a POSIX shell.
///
/// The whole rendered command line is handed to `sh -c` so the `cd ... &&`
/// prefix, the single-quoted arguments and conversion pipes work. Only POSIX
/// shells understand that quoting, so an `sh` must be on `PATH` on every
/// platform (on Windows, e.g. the one shipped with Git or MSYS2).
#[derive(Debug, Clone, Default)]
pub struct ShellProcessRunner;

impl ShellProcessRunner {
    pub fn new() -> Self {
        Self
    }

    fn shell_command(command_line: &str) -> Command {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command_line);
        cmd
    }
}

impl ProcessRunner for ShellProcessRunner {
    fn run(&self, command: &TsLintCommand) -> Result<ProcessOutput> {
        let command_line = command.to_shell_command();
        debug!("Spawning shell for: {}", command_line);

        let output = Self::shell_command(&command_line)
            .output()
            .map_err(|e| Error::ProcessError(format!("Failed to execute '{command_line}': {e}")))?;

        let exit_code = output.status.code().unwrap_or(-1);
        debug!("Lint process exited with {}", exit_code);

        Ok(ProcessOutput {
            exit_code,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
