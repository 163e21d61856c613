//! Duplicated code detector
//!
//! Works on the raw source text, not the tree: duplication is textual.
//! Every `min_lines`-sized block is compared against every later
//! non-overlapping block by Jaccard similarity over whitespace-tokenized
//! word sets. Token order and repetition inside a block do not affect the
//! score.
//!
//! The scan is quadratic in the number of lines (`O(L^2 * min_lines)`
//! tokenizations). Replacing it with hashing or a suffix index would change
//! which near-duplicates are reported, so the simple scan stays.

use crate::config::RulesConfig;
use crate::detectors::base::{Detector, SourceUnit};
use crate::models::{Finding, SmellKind};
use anyhow::Result;
use std::collections::HashSet;

pub struct DuplicatedCodeDetector;

/// Jaccard index of the two blocks' word sets; 0 when either set is empty
fn block_similarity(a: &[&str], b: &[&str]) -> f64 {
    let words_a: HashSet<&str> = a.iter().flat_map(|l| l.split_whitespace()).collect();
    let words_b: HashSet<&str> = b.iter().flat_map(|l| l.split_whitespace()).collect();

    if words_a.is_empty() || words_b.is_empty() {
        return 0.0;
    }

    let intersection = words_a.intersection(&words_b).count();
    let union = words_a.union(&words_b).count();
    intersection as f64 / union as f64
}

impl Detector for DuplicatedCodeDetector {
    fn kind(&self) -> SmellKind {
        SmellKind::DuplicatedCode
    }

    fn description(&self) -> &'static str {
        "Detects repeated blocks of similar code"
    }

    fn detect(&self, unit: &SourceUnit<'_>, config: &RulesConfig) -> Result<Vec<Finding>> {
        let rule = &config.duplicated_code;
        let min_lines = rule.min_lines;
        let lines: Vec<&str> = unit.source.split('\n').collect();
        let mut findings = Vec::new();

        if lines.len() < min_lines {
            return Ok(findings);
        }

        for i in 0..lines.len() - min_lines {
            let block = &lines[i..i + min_lines];

            let mut occurrences = 0usize;
            for j in (i + min_lines)..=(lines.len() - min_lines) {
                let other = &lines[j..j + min_lines];
                if block_similarity(block, other) >= rule.min_similarity {
                    occurrences += 1;
                }
            }

            if occurrences > 0 {
                findings.push(Finding::new(
                    self.kind(),
                    unit.path,
                    (i + 1) as u32,
                    format!(
                        "Code block starting at line {} appears {} times",
                        i + 1,
                        occurrences + 1
                    ),
                    rule.severity,
                ));
            }
        }

        Ok(findings)
    }
}
