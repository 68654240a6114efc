use anyhow::{Context, Result};
use tracing::{debug, info};
use tslint_runner_core::TsLintRunTask;

use crate::cli::LintArgs;
use crate::utils::parse_reporter;

/// Run the lint task and return its exit code.
///
/// The linter output (or the reporters' rendering) goes to stdout, the
/// task message to stderr.
pub fn run_command(lint: &LintArgs, print_report: bool) -> Result<i32> {
    let options = lint.load_options()?;
    let mut task = TsLintRunTask::new(options);
    for spec in &lint.reporters {
        let (id, reporter) = parse_reporter(spec)?;
        debug!("Registered lint reporter '{}'", id);
        task.add_lint_reporter(id, reporter);
    }

    let result = task.run().context("Lint task failed")?;
    info!("Lint task finished with exit code {}", result.exit_code());

    if print_report {
        match result.report() {
            Some(report) => println!("{}", report.to_json()?),
            None => eprintln!("⚠️  No report was produced"),
        }
    }

    let message = result.message().trim_end();
    if result.was_successful() {
        eprintln!("✅ {message}");
    } else {
        eprintln!("❌ {message}");
    }

    Ok(result.exit_code())
}
