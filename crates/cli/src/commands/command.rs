use anyhow::Result;
use tracing::debug;
use tslint_runner_core::TsLintRunTask;

use crate::cli::LintArgs;
use crate::utils::parse_reporter;

/// Print the shell command `run` would execute with the same arguments.
pub fn command_command(lint: &LintArgs) -> Result<()> {
    let options = lint.load_options()?;
    let mut task = TsLintRunTask::new(options);
    for spec in &lint.reporters {
        let (id, reporter) = parse_reporter(spec)?;
        task.add_lint_reporter(id, reporter);
    }

    let command = task.command();
    debug!("Command arguments: {:?}", command.arg_values());
    println!("{command}");
    Ok(())
}
