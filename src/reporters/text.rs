//! Text (terminal) reporter with colors and formatting

use crate::models::{group_by_kind, Finding, FindingsSummary, Severity};
use anyhow::Result;

/// Severity colors (ANSI escape codes)
fn severity_color(severity: &Severity) -> &'static str {
    match severity {
        Severity::High => "\x1b[91m",   // Light red
        Severity::Medium => "\x1b[33m", // Yellow
        Severity::Low => "\x1b[34m",    // Blue
    }
}

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Render findings grouped by smell category
pub fn render(findings: &[Finding]) -> Result<String> {
    if findings.is_empty() {
        return Ok("No code smells detected.\n".to_string());
    }

    let summary = FindingsSummary::from_findings(findings);
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD}Code Smell Report{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));

    let mut summary_parts = Vec::new();
    if summary.high > 0 {
        summary_parts.push(format!("\x1b[91m{} high{RESET}", summary.high));
    }
    if summary.medium > 0 {
        summary_parts.push(format!("\x1b[33m{} medium{RESET}", summary.medium));
    }
    if summary.low > 0 {
        summary_parts.push(format!("\x1b[34m{} low{RESET}", summary.low));
    }
    out.push_str(&format!(
        "{} total | {}\n\n",
        summary.total,
        summary_parts.join(" | ")
    ));

    for (kind, group) in group_by_kind(findings) {
        out.push_str(&format!(
            "{BOLD}{} ({} instances):{RESET}\n",
            kind.display_name(),
            group.len()
        ));
        out.push_str(&format!("{DIM}──────────────────────────────{RESET}\n"));

        for finding in group {
            let sev_c = severity_color(&finding.severity);
            out.push_str(&format!(
                "  {}:{}\n",
                finding.file.display(),
                finding.line
            ));
            out.push_str(&format!("    {}\n", finding.description));
            out.push_str(&format!(
                "    Severity: {sev_c}{}{RESET}\n",
                finding.severity
            ));
            out.push_str(&format!("    {DIM}{}{RESET}\n\n", finding.suggestion));
        }
    }

    Ok(out)
}
