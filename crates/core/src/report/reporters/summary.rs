use crate::report::{Report, Reporter, ReporterBase};

/// Per-file error and warning counts followed by a total line
#[derive(Debug, Clone, Default)]
pub struct SummaryReporter {
    base: ReporterBase,
}

impl SummaryReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

impl Reporter for SummaryReporter {
    fn name(&self) -> &str {
        "summary"
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
            rendered.push_str(&format!(
                "{}: {}, {}\n",
                self.base.file_path_style.display(&file.file_path),
                plural(file.num_of_errors(), "error"),
                plural(file.num_of_warnings(), "warning"),
            ));
        }
        rendered.push_str(&format!(
            "Total: {}, {} in {}\n",
            plural(report.num_of_errors(), "error"),
            plural(report.num_of_warnings(), "warning"),
            plural(report.num_of_files(), "file"),
        ));
        rendered
    }
}
