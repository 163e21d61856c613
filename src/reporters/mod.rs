//! Output reporters for detection results
//!
//! Supports three output formats:
//! - `text` - Terminal output grouped by smell category, with colors
//! - `json` - Machine-readable JSON
//! - `csv` - Delimited rows for spreadsheets and scripts
//!
//! Reporters only consume [`Finding`] fields; detection logic never depends
//! on anything in this module.

mod csv;
mod json;
mod text;

use crate::models::Finding;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, csv",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Render findings in the given format
pub fn render(findings: &[Finding], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(findings),
        OutputFormat::Json => json::render(findings),
        OutputFormat::Csv => csv::render(findings),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{Severity, SmellKind};

    /// A small fixed finding list shared by the reporter tests
    pub(crate) fn test_findings() -> Vec<Finding> {
        vec![
            Finding::new(
                SmellKind::LongMethod,
                "app/orders.py",
                12,
                "Method 'process' has 31 lines (max: 20)".to_string(),
                Severity::High,
            ),
            Finding::new(
                SmellKind::MagicNumbers,
                "app/orders.py",
                40,
                "Magic number 7 found".to_string(),
                Severity::Low,
            ),
            Finding::new(
                SmellKind::MagicNumbers,
                "app/billing.py",
                3,
                "Magic number 42 found".to_string(),
                Severity::Low,
            ),
        ]
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
        assert!(OutputFormat::from_str("sarif").is_err());
    }

    #[test]
    fn test_render_dispatches_all_formats() {
        let findings = test_findings();
        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Csv] {
            let out = render(&findings, format).expect("render");
            assert!(!out.is_empty());
        }
    }
}
