use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{ResearchReport, ResourceMap};

/// Fixed CSV header, one aggregate row per run
pub const CSV_HEADER: [&str; 4] = [
    "Company_name",
    "Usecases",
    "Resource_Collections",
    "Solution_Proposed",
];

/// Write a report as a single CSV row under the fixed header
///
/// List-valued fields are flattened into newline-joined cells; the resource
/// map flattens each entry as `"<use_case>:"` followed by one `"- <link>"`
/// line per link.
pub fn write_report_csv(report: &ResearchReport, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {:?}", path))?;

    let use_cases = report.use_cases.join("\n");
    let resources = flatten_resources(&report.resources);
    let solutions = report.solutions.join("\n");

    writer.write_record(CSV_HEADER)?;
    writer.write_record([
        report.subject.as_str(),
        use_cases.as_str(),
        resources.as_str(),
        solutions.as_str(),
    ])?;
    writer.flush().context("Failed to write CSV")?;

    Ok(())
}

fn flatten_resources(resources: &ResourceMap) -> String {
    resources
        .entries()
        .iter()
        .map(|entry| format!("{}:\n- {}", entry.use_case, entry.links.join("\n- ")))
        .collect::<Vec<_>>()
        .join("\n")
}
