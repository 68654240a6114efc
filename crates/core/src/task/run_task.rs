//! The lint task: prepare, build the command, run it, process the output, report

use std::path::PathBuf;
use tracing::{debug, info, warn};

use super::exit_code::TaskExitCode;
use super::result::TaskResult;
use crate::{
    command::{CommandBuilder, TsLintCommand},
    config::TsLintOptions,
    error::{Error, Result},
    report::{Destination, FilePathStyle, Report, Reporter},
    runners::{OutputStream, ProcessOutput, ProcessRunner, ShellProcessRunner, StdoutStream},
};

/// Everything one execution produces before it is turned into a result
#[derive(Debug, Default)]
struct RunState {
    lint_exit_code: i32,
    lint_stdout: String,
    lint_stderr: String,
    report: Option<Report>,
}

/// Runs the linter once and turns its outcome into a [`TaskResult`].
pub struct TsLintRunTask {
    options: TsLintOptions,
    lint_reporters: Vec<(String, Box<dyn Reporter>)>,
    process_runner: Box<dyn ProcessRunner>,
    output: Box<dyn OutputStream>,
}

impl TsLintRunTask {
    pub fn new(options: TsLintOptions) -> Self {
        Self {
            options,
            lint_reporters: Vec::new(),
            process_runner: Box::new(ShellProcessRunner::new()),
            output: Box::new(StdoutStream),
        }
    }

    pub fn with_process_runner(mut self, runner: impl ProcessRunner + 'static) -> Self {
        self.process_runner = Box::new(runner);
        self
    }

    pub fn with_output(mut self, output: impl OutputStream + 'static) -> Self {
        self.output = Box::new(output);
        self
    }

    pub fn with_lint_reporter(
        mut self,
        id: impl Into<String>,
        reporter: impl Reporter + 'static,
    ) -> Self {
        self.add_lint_reporter(id, Box::new(reporter));
        self
    }

    pub fn options(&self) -> &TsLintOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut TsLintOptions {
        &mut self.options
    }

    /// Register a reporter; an existing reporter with the same id is replaced in place.
    pub fn add_lint_reporter(
        &mut self,
        id: impl Into<String>,
        reporter: Box<dyn Reporter>,
    ) -> &mut Self {
        let id = id.into();
        match self.lint_reporters.iter_mut().find(|(existing, _)| *existing == id) {
            Some(slot) => slot.1 = reporter,
            None => self.lint_reporters.push((id, reporter)),
        }
        self
    }

    pub fn remove_lint_reporter(&mut self, id: &str) -> &mut Self {
        self.lint_reporters.retain(|(existing, _)| existing != id);
        self
    }

    pub fn lint_reporter_ids(&self) -> Vec<&str> {
        self.lint_reporters.iter().map(|(id, _)| id.as_str()).collect()
    }

    /// The command the task would run with the current options and reporters
    pub fn command(&self) -> TsLintCommand {
        let mut options = self.options.clone();
        Self::apply_reporter_format(&mut options, !self.lint_reporters.is_empty());
        CommandBuilder::new(&options).build()
    }

    pub fn run(&mut self) -> Result<TaskResult> {
        self.prepare();
        let command = CommandBuilder::new(&self.options).build();
        self.print_header(&command);

        let mut state = self.execute(&command)?;
        self.process_output(&mut state)?;

        Ok(self.build_result(state))
    }

    /// Reporters need a decodable format; default to JSON when none was chosen.
    fn apply_reporter_format(options: &mut TsLintOptions, has_reporters: bool) {
        if has_reporters && options.format().is_none() && options.convert_format_to().is_none() {
            options.format = Some("json".to_string());
        }
    }

    fn prepare(&mut self) {
        let base_dir = self.report_base_dir();
        for (id, reporter) in &mut self.lint_reporters {
            match reporter.destination().cloned() {
                None => {
                    debug!("Reporter '{}' writes to the task output", id);
                    reporter.set_file_path_style(FilePathStyle::Relative(base_dir.clone()));
                    reporter.set_destination(Destination::Output);
                }
                // Relative report files live next to `out`, under the working directory.
                Some(Destination::File(path)) if path.is_relative() => {
                    let resolved = self.options.resolve_path(&path);
                    debug!("Reporter '{}' writes to {}", id, resolved.display());
                    reporter.set_destination(Destination::File(resolved));
                }
                Some(_) => {}
            }
        }

        Self::apply_reporter_format(&mut self.options, !self.lint_reporters.is_empty());
    }

    fn report_base_dir(&self) -> PathBuf {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        match self.options.working_directory() {
            Some(dir) => cwd.join(dir),
            None => cwd,
        }
    }

    fn print_header(&self, command: &TsLintCommand) {
        let working_directory = self
            .options
            .working_directory()
            .map(|dir| dir.display().to_string())
            .unwrap_or_else(|| ".".to_string());
        info!(
            "TsLint task runs: {} in directory \"{}\"",
            command, working_directory
        );
    }

    fn execute(&mut self, command: &TsLintCommand) -> Result<RunState> {
        let mut state = RunState::default();

        if !self.lint_reporters.is_empty() && !self.options.is_output_machine_readable() {
            warn!("Lint reporters require a machine readable output format");
            state.lint_exit_code = TaskExitCode::Invalid.code();
            return Ok(state);
        }

        if !self.prepare_output_directory() {
            state.lint_exit_code = TaskExitCode::OutputDir.code();
            return Ok(state);
        }

        let ProcessOutput {
            exit_code,
            stdout,
            stderr,
        } = self.process_runner.run(command)?;
        debug!("Lint process finished with exit code {}", exit_code);

        state.lint_exit_code = exit_code;
        state.lint_stdout = stdout;
        state.lint_stderr = stderr;
        Ok(state)
    }

    /// Make sure the directory of the `out` file exists.
    fn prepare_output_directory(&self) -> bool {
        let Some(out) = self.options.out() else {
            return true;
        };

        let out_path = self.options.resolve_path(out);
        let Some(dir) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) else {
            return true;
        };

        if dir.is_dir() {
            return true;
        }

        match std::fs::create_dir_all(dir) {
            Ok(()) => {
                debug!("Created output directory {}", dir.display());
                true
            }
            Err(e) => {
                warn!("Failed to create output directory {}: {}", dir.display(), e);
                false
            }
        }
    }

    fn process_output(&mut self, state: &mut RunState) -> Result<()> {
        if !TaskExitCode::is_lint_success(state.lint_exit_code) {
            return Ok(());
        }

        if self.options.is_output_machine_readable() {
            let machine_output = match self.options.out() {
                Some(out) => std::fs::read_to_string(self.options.resolve_path(out))?,
                None => state.lint_stdout.clone(),
            };
            let report = Report::from_json(&machine_output)?;
            debug!(
                "Decoded report: {} errors, {} warnings",
                report.num_of_errors(),
                report.num_of_warnings()
            );

            for (id, reporter) in self.lint_reporters.iter_mut() {
                reporter.set_report(report.clone());
                reporter
                    .generate(&mut *self.output)
                    .map_err(|e| Error::ReporterError {
                        id: id.clone(),
                        message: e.to_string(),
                    })?;
            }

            state.report = Some(report);
        }

        if self.lint_reporters.is_empty() {
            self.output.write(&state.lint_stdout)?;
        }

        Ok(())
    }

    fn build_result(&self, state: RunState) -> TaskResult {
        let exit_code = match state.report {
            Some(ref report) => TaskExitCode::from_policy(
                self.options.fail_on,
                report.num_of_errors(),
                report.num_of_warnings(),
            )
            .code(),
            None => state.lint_exit_code,
        };

        let message = match TaskExitCode::from_code(state.lint_exit_code) {
            Some(known) => known.message().to_string(),
            None => state.lint_stderr.clone(),
        };

        TaskResult::new(
            exit_code,
            message,
            state.report,
            &self.options.asset_name_prefix,
        )
    }
}
