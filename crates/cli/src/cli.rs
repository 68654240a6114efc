use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tslint_runner_core::{FailOn, TsLintOptions};

use crate::commands::{command_command, init_command, run_command};

#[derive(Parser, Debug)]
#[command(name = "tslint-runner")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Runner {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run tslint and exit with the task exit code
    #[command(visible_alias = "r")]
    Run {
        #[command(flatten)]
        lint: LintArgs,

        /// Print the decoded report as JSON after the run
        #[arg(long)]
        print_report: bool,
    },
    /// Print the tslint command without executing it
    #[command(visible_alias = "c")]
    Command {
        #[command(flatten)]
        lint: LintArgs,
    },
    /// Write a default .tslint-runner.json
    Init {
        /// Directory to write the options file to (defaults to the current directory)
        #[arg(short, long)]
        cwd: Option<String>,

        /// Overwrite an existing options file
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command and return the process exit code
    pub fn execute(self) -> Result<i32> {
        match self {
            Commands::Run { lint, print_report } => run_command(&lint, print_report),
            Commands::Command { lint } => command_command(&lint).map(|_| 0),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force).map(|_| 0),
        }
    }
}

fn parse_fail_on(value: &str) -> std::result::Result<FailOn, String> {
    value.parse::<FailOn>().map_err(|e| e.to_string())
}

/// Lint options accepted on the command line; set values override the options file
#[derive(Args, Debug, Default, Clone)]
pub struct LintArgs {
    /// Options file (defaults to the nearest .tslint-runner.json)
    #[arg(long = "options", value_name = "FILE")]
    pub options_file: Option<PathBuf>,

    /// Do not look for an options file
    #[arg(long, conflicts_with = "options_file")]
    pub no_options_file: bool,

    /// Directory to step in before running tslint
    #[arg(short = 'C', long)]
    pub working_directory: Option<PathBuf>,

    /// Path to the tslint executable
    #[arg(long)]
    pub tslint_executable: Option<String>,

    /// Severity that makes the task fail: never, warning or error
    #[arg(long, value_parser = parse_fail_on)]
    pub fail_on: Option<FailOn>,

    /// tslint configuration file
    #[arg(short = 'c', long = "config")]
    pub config_file: Option<String>,

    /// File or glob to exclude from linting (repeatable)
    #[arg(long)]
    pub exclude: Vec<String>,

    /// Make tslint return 0 even if there are lint errors
    #[arg(long)]
    pub force: bool,

    /// File tslint writes its output to
    #[arg(short, long)]
    pub out: Option<String>,

    /// Additional rules directory
    #[arg(long)]
    pub rules_dir: Option<String>,

    /// Additional formatters directory
    #[arg(long)]
    pub formatters_dir: Option<String>,

    /// tslint output format, e.g. json or prose
    #[arg(short, long)]
    pub format: Option<String>,

    /// tsconfig.json that determines which files are linted
    #[arg(short, long)]
    pub project: Option<String>,

    /// Enable the type checker (requires --project)
    #[arg(long)]
    pub type_check: bool,

    /// Pipe the output through tslint-formatters-convert with this converter
    #[arg(long)]
    pub convert_format_to: Option<String>,

    /// Prefix for the names of the task assets
    #[arg(long)]
    pub asset_name_prefix: Option<String>,

    /// Reporter to render the report with: verbose, summary or checkstyle, optionally =FILE (repeatable)
    #[arg(short = 'r', long = "reporter", value_name = "ID[=FILE]")]
    pub reporters: Vec<String>,

    /// TypeScript files to lint
    pub paths: Vec<String>,
}

impl LintArgs {
    /// Options from the options file (if any) with the command line applied on top
    pub fn load_options(&self) -> Result<TsLintOptions> {
        let mut options = if self.no_options_file {
            TsLintOptions::default()
        } else if let Some(ref path) = self.options_file {
            TsLintOptions::load_from_file(path)
                .with_context(|| format!("Failed to load options from {}", path.display()))?
        } else {
            let start = match self.working_directory {
                Some(ref dir) => dir.clone(),
                None => std::env::current_dir().context("Failed to get current directory")?,
            };
            TsLintOptions::discover(&start).context("Failed to load the options file")?
        };

        self.apply(&mut options);
        debug!("Effective lint options: {:?}", options);
        Ok(options)
    }

    /// Override `options` with every value given on the command line.
    pub fn apply(&self, options: &mut TsLintOptions) {
        if let Some(ref dir) = self.working_directory {
            options.working_directory = Some(dir.clone());
        }
        if let Some(ref executable) = self.tslint_executable {
            options.tslint_executable = executable.clone();
        }
        if let Some(fail_on) = self.fail_on {
            options.fail_on = fail_on;
        }
        if let Some(ref config_file) = self.config_file {
            options.config_file = Some(config_file.clone());
        }
        options.exclude.extend(self.exclude.iter().cloned());
        if self.force {
            options.force = true;
        }
        if let Some(ref out) = self.out {
            options.out = Some(out.clone());
        }
        if let Some(ref dir) = self.rules_dir {
            options.rules_dir = Some(dir.clone());
        }
        if let Some(ref dir) = self.formatters_dir {
            options.formatters_dir = Some(dir.clone());
        }
        if let Some(ref format) = self.format {
            options.format = Some(format.clone());
        }
        if let Some(ref project) = self.project {
            options.project = Some(project.clone());
        }
        if self.type_check {
            options.type_check = true;
        }
        if let Some(ref converter) = self.convert_format_to {
            options.convert_format_to = Some(converter.clone());
        }
        if let Some(ref prefix) = self.asset_name_prefix {
            options.asset_name_prefix = prefix.clone();
        }
        options.paths.extend(self.paths.iter().cloned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_arguments() {
        let runner = Runner::try_parse_from([
            "tslint-runner",
            "run",
            "--fail-on",
            "warning",
            "-f",
            "json",
            "--exclude",
            "a.ts",
            "--exclude",
            "b.ts",
            "-r",
            "verbose",
            "src/x.ts",
        ])
        .unwrap();

        let Commands::Run { lint, print_report } = runner.command else {
            panic!("expected the run command");
        };
        assert!(!print_report);
        assert_eq!(lint.fail_on, Some(FailOn::Warning));
        assert_eq!(lint.format.as_deref(), Some("json"));
        assert_eq!(lint.exclude, vec!["a.ts", "b.ts"]);
        assert_eq!(lint.reporters, vec!["verbose"]);
        assert_eq!(lint.paths, vec!["src/x.ts"]);
    }

    #[test]
    fn test_invalid_fail_on_is_rejected() {
        let err = Runner::try_parse_from(["tslint-runner", "run", "--fail-on", "sometimes"])
            .unwrap_err();
        assert!(err.to_string().contains("invalid failOn value"));
    }

    #[test]
    fn test_apply_overrides_file_values() {
        let mut options: TsLintOptions = serde_json::from_str(
            r#"{"failOn": "never", "format": "prose", "exclude": ["vendor/**"], "paths": ["a.ts"]}"#,
        )
        .unwrap();

        let lint = LintArgs {
            fail_on: Some(FailOn::Error),
            format: Some("json".to_string()),
            exclude: vec!["dist/**".to_string()],
            paths: vec!["b.ts".to_string(), "a.ts".to_string()],
            force: true,
            ..Default::default()
        };
        lint.apply(&mut options);

        assert_eq!(options.fail_on, FailOn::Error);
        assert_eq!(options.format(), Some("json"));
        assert!(options.force);
        assert_eq!(
            options.exclude.iter().collect::<Vec<_>>(),
            vec!["vendor/**", "dist/**"]
        );
        assert_eq!(options.paths.iter().collect::<Vec<_>>(), vec!["a.ts", "b.ts"]);
    }

    #[test]
    fn test_unset_arguments_keep_file_values() {
        let mut options = TsLintOptions::new()
            .with_fail_on(FailOn::Warning)
            .with_out("out.json");
        LintArgs::default().apply(&mut options);

        assert_eq!(options.fail_on, FailOn::Warning);
        assert_eq!(options.out(), Some("out.json"));
        assert!(!options.force);
    }
}
