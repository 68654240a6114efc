use crate::report::{Finding, Report, Reporter, ReporterBase};

/// One line per finding, in the style of the linter's own `verbose` formatter:
/// `ERROR: (semicolon) src/a.ts[3, 5]: Missing semicolon`
#[derive(Debug, Clone, Default)]
pub struct VerboseReporter {
    base: ReporterBase,
}

impl VerboseReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn render_finding(&self, file_path: &str, finding: &Finding) -> String {
        let mut line = finding.severity.as_str().to_uppercase();
        line.push_str(": ");
        if let Some(ref source) = finding.source {
            line.push_str(&format!("({source}) "));
        }
        line.push_str(file_path);
        if let Some(row) = finding.line {
            line.push_str(&format!("[{}, {}]", row, finding.column.unwrap_or(1)));
        }
        line.push_str(": ");
        line.push_str(finding.message.as_deref().unwrap_or(""));
        line
    }
}

impl Reporter for VerboseReporter {
    fn name(&self) -> &str {
        "verbose"
    }

    fn base(&self) -> &ReporterBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ReporterBase {
        &mut self.base
    }

    fn render(&self, report: &Report) -> String {
        let mut rendered = String::new();
        for file in report.files() {
            let file_path = self.base.file_path_style.display(&file.file_path);
            for finding in &file.findings {
                rendered.push_str(&self.render_finding(&file_path, finding));
                rendered.push('\n');
            }
        }
        rendered
    }
}
