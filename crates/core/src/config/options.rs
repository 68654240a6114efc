use crate::impl_case_insensitive_deserialize;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::InclusionList;
use crate::error::Error;

/// Default location of the linter in a project with local node modules
pub const DEFAULT_TSLINT_EXECUTABLE: &str = "node_modules/.bin/tslint";

/// Severity threshold that makes the task fail
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailOn {
    Never,
    Warning,
    #[default]
    Error,
}

impl_case_insensitive_deserialize!(
    FailOn,
    Never => "never",
    Warning => "warning",
    Error => "error"
);

impl FailOn {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailOn::Never => "never",
            FailOn::Warning => "warning",
            FailOn::Error => "error",
        }
    }
}

impl fmt::Display for FailOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FailOn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "never" => Ok(FailOn::Never),
            "warning" => Ok(FailOn::Warning),
            "error" => Ok(FailOn::Error),
            other => Err(Error::ConfigError(format!(
                "invalid failOn value '{other}', expected one of: never, warning, error"
            ))),
        }
    }
}

/// Every option the lint task understands.
///
/// Empty strings behave like unset values: the matching command line flag is
/// not emitted.
#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct TsLintOptions {
    /// Prefix for the names of the assets in the task result
    #[serde(skip_serializing_if = "String::is_empty")]
    pub asset_name_prefix: String,

    /// Directory to step in before running the linter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<PathBuf>,

    pub tslint_executable: String,

    pub fail_on: FailOn,

    /// `--config`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,

    /// `--exclude`, one flag per included item
    #[serde(skip_serializing_if = "InclusionList::is_empty")]
    pub exclude: InclusionList,

    /// `--force`
    pub force: bool,

    /// `--out`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out: Option<String>,

    /// `--rules-dir`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules_dir: Option<String>,

    /// `--formatters-dir`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatters_dir: Option<String>,

    /// `--format`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// `--project`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// `--type-check`, requires `project`
    pub type_check: bool,

    /// Pipe the output through `tslint-formatters-convert` with this converter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convert_format_to: Option<String>,

    /// Files to lint
    #[serde(skip_serializing_if = "InclusionList::is_empty")]
    pub paths: InclusionList,
}

impl Default for TsLintOptions {
    fn default() -> Self {
        Self {
            asset_name_prefix: String::new(),
            working_directory: None,
            tslint_executable: DEFAULT_TSLINT_EXECUTABLE.to_string(),
            fail_on: FailOn::default(),
            config_file: None,
            exclude: InclusionList::default(),
            force: false,
            out: None,
            rules_dir: None,
            formatters_dir: None,
            format: None,
            project: None,
            type_check: false,
            convert_format_to: None,
            paths: InclusionList::default(),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl TsLintOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.asset_name_prefix = prefix.into();
        self
    }

    pub fn with_working_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_directory = Some(dir.into());
        self
    }

    pub fn with_tslint_executable(mut self, executable: impl Into<String>) -> Self {
        self.tslint_executable = executable.into();
        self
    }

    pub fn with_fail_on(mut self, fail_on: FailOn) -> Self {
        self.fail_on = fail_on;
        self
    }

    pub fn with_config_file(mut self, path: impl Into<String>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    pub fn with_exclude(mut self, exclude: impl Into<InclusionList>) -> Self {
        self.exclude = exclude.into();
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_out(mut self, path: impl Into<String>) -> Self {
        self.out = Some(path.into());
        self
    }

    pub fn with_rules_dir(mut self, dir: impl Into<String>) -> Self {
        self.rules_dir = Some(dir.into());
        self
    }

    pub fn with_formatters_dir(mut self, dir: impl Into<String>) -> Self {
        self.formatters_dir = Some(dir.into());
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_project(mut self, path: impl Into<String>) -> Self {
        self.project = Some(path.into());
        self
    }

    pub fn with_type_check(mut self, type_check: bool) -> Self {
        self.type_check = type_check;
        self
    }

    pub fn with_convert_format_to(mut self, converter: impl Into<String>) -> Self {
        self.convert_format_to = Some(converter.into());
        self
    }

    pub fn with_paths(mut self, paths: impl Into<InclusionList>) -> Self {
        self.paths = paths.into();
        self
    }

    pub fn working_directory(&self) -> Option<&Path> {
        self.working_directory
            .as_deref()
            .filter(|dir| !dir.as_os_str().is_empty())
    }

    pub fn config_file(&self) -> Option<&str> {
        non_empty(&self.config_file)
    }

    pub fn out(&self) -> Option<&str> {
        non_empty(&self.out)
    }

    pub fn rules_dir(&self) -> Option<&str> {
        non_empty(&self.rules_dir)
    }

    pub fn formatters_dir(&self) -> Option<&str> {
        non_empty(&self.formatters_dir)
    }

    pub fn format(&self) -> Option<&str> {
        non_empty(&self.format)
    }

    pub fn project(&self) -> Option<&str> {
        non_empty(&self.project)
    }

    pub fn convert_format_to(&self) -> Option<&str> {
        non_empty(&self.convert_format_to)
    }

    /// Whether the linter output can be decoded into a report.
    pub fn is_output_machine_readable(&self) -> bool {
        match self.convert_format_to() {
            Some(converter) => converter.to_lowercase().contains("2json"),
            None => self.format() == Some("json"),
        }
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        match self.working_directory() {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}
