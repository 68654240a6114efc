use crate::impl_case_insensitive_deserialize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a single lint finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl_case_insensitive_deserialize!(
    Severity,
    Warning => "warning",
    Error => "error"
);

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported issue in a source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,

    /// Rule that produced the finding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Finding {
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            source: None,
            line: None,
            column: None,
            message: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_position(mut self, line: u64, column: u64) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

/// Position in the linter's native JSON output (zero based)
#[derive(Debug, Deserialize)]
pub(crate) struct NativePosition {
    #[serde(default)]
    line: u64,
    #[serde(default)]
    character: u64,
}

/// One element of the array the linter prints with `--format json`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NativeFailure {
    pub(crate) name: String,
    #[serde(default)]
    failure: Option<String>,
    #[serde(default)]
    rule_name: Option<String>,
    rule_severity: Severity,
    #[serde(default)]
    start_position: Option<NativePosition>,
}

impl From<NativeFailure> for Finding {
    fn from(failure: NativeFailure) -> Self {
        Finding {
            severity: failure.rule_severity,
            source: failure.rule_name,
            line: failure.start_position.as_ref().map(|p| p.line + 1),
            column: failure.start_position.as_ref().map(|p| p.character + 1),
            message: failure.failure,
        }
    }
}
