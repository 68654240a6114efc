//! Pluggable sinks that render a decoded report

use std::path::{Path, PathBuf};
use tracing::debug;

use super::Report;
use crate::{error::Result, runners::OutputStream};

/// Where a reporter writes its rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// The task's output stream
    Output,
    /// A file; its parent directory is created when missing
    File(PathBuf),
}

/// How file paths are displayed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilePathStyle {
    /// Paths exactly as the linter reported them
    #[default]
    AsIs,
    /// Paths below the base directory are shown relative to it
    Relative(PathBuf),
    /// Relative paths are joined onto the base directory
    Absolute(PathBuf),
}

impl FilePathStyle {
    pub fn display(&self, file_path: &str) -> String {
        let path = Path::new(file_path);
        match self {
            FilePathStyle::AsIs => file_path.to_string(),
            FilePathStyle::Relative(base) => match path.strip_prefix(base) {
                Ok(relative) if !relative.as_os_str().is_empty() => {
                    relative.to_string_lossy().into_owned()
                }
                _ => file_path.to_string(),
            },
            FilePathStyle::Absolute(base) if path.is_relative() => {
                base.join(path).to_string_lossy().into_owned()
            }
            FilePathStyle::Absolute(_) => file_path.to_string(),
        }
    }
}

/// State every reporter carries
#[derive(Debug, Clone, Default)]
pub struct ReporterBase {
    pub report: Option<Report>,
    pub destination: Option<Destination>,
    pub file_path_style: FilePathStyle,
}

/// A sink that renders a report to some destination.
///
/// Implementors provide the rendering; storing the report, choosing the
/// destination and writing the result are shared.
pub trait Reporter {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    fn base(&self) -> &ReporterBase;

    fn base_mut(&mut self) -> &mut ReporterBase;

    /// Render the report as text
    fn render(&self, report: &Report) -> String;

    fn set_report(&mut self, report: Report) {
        self.base_mut().report = Some(report);
    }

    fn destination(&self) -> Option<&Destination> {
        self.base().destination.as_ref()
    }

    fn set_destination(&mut self, destination: Destination) {
        self.base_mut().destination = Some(destination);
    }

    fn set_file_path_style(&mut self, style: FilePathStyle) {
        self.base_mut().file_path_style = style;
    }

    /// Render the stored report and write it to the destination.
    ///
    /// Without a report there is nothing to do.
    fn generate(&self, output: &mut dyn OutputStream) -> Result<()> {
        let Some(report) = self.base().report.as_ref() else {
            debug!("Reporter '{}' has no report to render", self.name());
            return Ok(());
        };

        let rendered = self.render(report);
        match self.destination() {
            Some(Destination::File(path)) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, rendered)?;
                debug!("Reporter '{}' wrote {}", self.name(), path.display());
            }
            Some(Destination::Output) | None => output.write(&rendered)?,
        }
        Ok(())
    }
}
