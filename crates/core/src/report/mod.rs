//! Lint report model and reporters
//!
//! A report maps each linted file to the findings reported for it. It can be
//! decoded from two JSON shapes:
//! - an object keyed by file path, valued by arrays of findings;
//! - the array of failures the linter prints with `--format json`, which is
//!   grouped by file path in first-seen order.

mod finding;
pub mod reporter;
pub mod reporters;

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::{Error, Result};

pub use finding::{Finding, Severity};
pub use reporter::{Destination, FilePathStyle, Reporter, ReporterBase};
pub use reporters::{CheckstyleReporter, SummaryReporter, VerboseReporter};

use finding::NativeFailure;

/// Findings of a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub file_path: String,
    pub findings: Vec<Finding>,
}

impl FileReport {
    pub fn num_of_errors(&self) -> usize {
        self.findings.iter().filter(|f| f.is_error()).count()
    }

    pub fn num_of_warnings(&self) -> usize {
        self.findings.iter().filter(|f| f.is_warning()).count()
    }

    pub fn highest_severity(&self) -> Option<Severity> {
        self.findings.iter().map(|f| f.severity).max()
    }
}

/// All findings of a lint run, grouped by file path in first-seen order
#[derive(Debug, Clone, Default)]
pub struct Report {
    files: IndexMap<String, FileReport>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the linter's machine readable output.
    ///
    /// Output consisting only of whitespace is an empty report.
    pub fn from_json(output: &str) -> Result<Self> {
        if output.trim().is_empty() {
            return Ok(Self::new());
        }
        serde_json::from_str(output).map_err(Error::ReportDecodeError)
    }

    /// Encode in the grouped-by-file shape.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Append findings to a file, creating its entry on first use.
    pub fn add_findings(&mut self, file_path: &str, findings: impl IntoIterator<Item = Finding>) {
        match self.files.entry(file_path.to_string()) {
            Entry::Occupied(mut entry) => entry.get_mut().findings.extend(findings),
            Entry::Vacant(entry) => {
                entry.insert(FileReport {
                    file_path: file_path.to_string(),
                    findings: findings.into_iter().collect(),
                });
            }
        }
    }

    /// Files in the order they were first reported
    pub fn files(&self) -> impl ExactSizeIterator<Item = &FileReport> + '_ {
        self.files.values()
    }

    pub fn num_of_files(&self) -> usize {
        self.files.len()
    }

    pub fn file(&self, file_path: &str) -> Option<&FileReport> {
        self.files.get(file_path)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn num_of_errors(&self) -> usize {
        self.files.values().map(FileReport::num_of_errors).sum()
    }

    pub fn num_of_warnings(&self) -> usize {
        self.files.values().map(FileReport::num_of_warnings).sum()
    }

    pub fn highest_severity(&self) -> Option<Severity> {
        self.files.values().filter_map(FileReport::highest_severity).max()
    }
}

/// Reports are equal when they list the same files in the same order.
impl PartialEq for Report {
    fn eq(&self, other: &Self) -> bool {
        self.files.values().eq(other.files.values())
    }
}

impl Eq for Report {}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.files.len()))?;
        for file in self.files.values() {
            map.serialize_entry(&file.file_path, &file.findings)?;
        }
        map.end()
    }
}

struct ReportVisitor;

impl<'de> Visitor<'de> for ReportVisitor {
    type Value = Report;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object of file paths to findings or an array of failures")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Report, A::Error> {
        let mut report = Report::new();
        while let Some((file_path, findings)) = map.next_entry::<String, Vec<Finding>>()? {
            report.add_findings(&file_path, findings);
        }
        Ok(report)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Report, A::Error> {
        let mut report = Report::new();
        while let Some(failure) = seq.next_element::<NativeFailure>()? {
            let file_path = failure.name.clone();
            report.add_findings(&file_path, [Finding::from(failure)]);
        }
        Ok(report)
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Report, E> {
        Ok(Report::new())
    }
}

impl<'de> Deserialize<'de> for Report {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(ReportVisitor)
    }
}
