//! CSV reporter
//!
//! One row per finding with a fixed header:
//! `Type,File,Line,Description,Severity,Suggestion`

use crate::models::Finding;
use anyhow::Result;

/// Render findings as CSV
pub fn render(findings: &[Finding]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record([
        "Type",
        "File",
        "Line",
        "Description",
        "Severity",
        "Suggestion",
    ])?;

    for finding in findings {
        writer.write_record([
            finding.kind.display_name(),
            &finding.file.display().to_string(),
            &finding.line.to_string(),
            &finding.description,
            &finding.severity.to_string(),
            &finding.suggestion,
        ])?;
    }

    let bytes = writer.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}
