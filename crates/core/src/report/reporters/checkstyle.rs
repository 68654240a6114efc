use crate::report::{Report, Reporter, ReporterBase};

/// Checkstyle XML, understood by most CI servers
#[derive(Debug, Clone, Default)]
pub struct CheckstyleReporter {
    base: ReporterBase,
}

impl CheckstyleReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}

impl Reporter for CheckstyleReporter {
    fn name(&self) -> &str {
        "checkstyle"
    }

    fn base(&self) -> &ReporterBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ReporterBase {
        &mut self.base
    }

    fn render(&self, report: &Report) -> String {
        let mut xml = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
        xml.push_str("<checkstyle version=\"4.3\">\n");

        for file in report.files() {
            let file_path = self.base.file_path_style.display(&file.file_path);
            xml.push_str(&format!("  <file name=\"{}\">\n", escape_xml(&file_path)));
            for finding in &file.findings {
                xml.push_str("    <error");
                if let Some(line) = finding.line {
                    xml.push_str(&format!(" line=\"{line}\""));
                }
                if let Some(column) = finding.column {
                    xml.push_str(&format!(" column=\"{column}\""));
                }
                xml.push_str(&format!(" severity=\"{}\"", finding.severity));
                xml.push_str(&format!(
                    " message=\"{}\"",
                    escape_xml(finding.message.as_deref().unwrap_or(""))
                ));
                if let Some(ref source) = finding.source {
                    xml.push_str(&format!(" source=\"{}\"", escape_xml(source)));
                }
                xml.push_str("/>\n");
            }
            xml.push_str("  </file>\n");
        }

        xml.push_str("</checkstyle>\n");
        xml
    }
}
