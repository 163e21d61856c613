//! JSON reporter
//!
//! Outputs `{"total_smells": N, "smells": [...]}` as pretty-printed JSON.
//! Useful for machine consumption, piping to jq, or further processing.

use crate::models::Finding;
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    total_smells: usize,
    smells: &'a [Finding],
}

/// Render findings as JSON
pub fn render(findings: &[Finding]) -> Result<String> {
    let report = JsonReport {
        total_smells: findings.len(),
        smells: findings,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_findings;

    #[test]
    fn test_json_render_valid() {
        let out = render(&test_findings()).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("parse JSON");
        assert_eq!(parsed["total_smells"], 3);
        let smells = parsed["smells"].as_array().expect("smells array");
        assert_eq!(smells.len(), 3);
        assert_eq!(smells[0]["type"], "long_method");
        assert_eq!(smells[0]["line"], 12);
        assert_eq!(smells[0]["severity"], "high");
    }

    #[test]
    fn test_json_empty_findings() {
        let out = render(&[]).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("parse JSON");
        assert_eq!(parsed["total_smells"], 0);
        assert!(parsed["smells"].as_array().expect("smells array").is_empty());
    }
}
