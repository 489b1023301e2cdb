use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::ResearchReport;

/// Human-readable report format
pub struct TextReport<'a> {
    report: &'a ResearchReport,
}

impl<'a> TextReport<'a> {
    pub fn new(report: &'a ResearchReport) -> Self {
        Self { report }
    }

    /// Format the report as sectioned text
    pub fn format(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("AI/ML Use-Case Report: {}\n", self.report.subject));
        output.push_str(&format!(
            "Generated {} (run {})\n\n",
            self.report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            self.report.run_id
        ));

        push_section(&mut output, "Company Information");
        output.push_str(self.report.summary.trim());
        output.push_str("\n\n");

        push_section(&mut output, "Generated AI/ML Use Cases");
        for use_case in &self.report.use_cases {
            output.push_str(&format!("- {}\n", use_case));
        }
        output.push('\n');

        push_section(&mut output, "Collected Resources");
        for entry in self.report.resources.entries() {
            output.push_str(&format!("{}:\n", entry.use_case));
            for link in &entry.links {
                output.push_str(&format!("  - {}\n", link));
            }
        }
        output.push('\n');

        push_section(&mut output, "Proposed GenAI Solutions");
        for solution in &self.report.solutions {
            output.push_str(&format!("- {}\n", solution));
        }

        output
    }

    /// Write the formatted report to a text file
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        write!(file, "{}", self.format())?;
        Ok(())
    }
}

fn push_section(output: &mut String, title: &str) {
    output.push_str(title);
    output.push('\n');
    output.push_str(&"-".repeat(title.len()));
    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResourceMap;

    #[test]
    fn test_format_sections() {
        let mut resources = ResourceMap::new();
        resources.insert("Forecasting", vec!["https://example.com/ds".to_string()]);

        let report = ResearchReport::new(
            "Tesla",
            "An EV maker.".to_string(),
            vec!["Forecasting".to_string()],
            resources,
            vec!["Manual assistant".to_string()],
        );

        let text = TextReport::new(&report).format();

        assert!(text.starts_with("AI/ML Use-Case Report: Tesla\n"));
        for section in [
            "Company Information",
            "Generated AI/ML Use Cases",
            "Collected Resources",
            "Proposed GenAI Solutions",
        ] {
            assert!(text.contains(section), "missing section: {}", section);
        }
        assert!(text.contains("- Forecasting\n"));
        assert!(text.contains("Forecasting:\n  - https://example.com/ds\n"));
        assert!(text.contains("- Manual assistant\n"));
    }

    #[test]
    fn test_write_file() {
        let report = ResearchReport::new(
            "Tesla",
            "An EV maker.".to_string(),
            vec!["Forecasting".to_string()],
            ResourceMap::new(),
            vec!["NA".to_string()],
        );

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        TextReport::new(&report).write_file(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, TextReport::new(&report).format());
    }
}
