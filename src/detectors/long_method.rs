//! Long method detector
//!
//! Flags function definitions whose subtree spans more lines than the
//! configured maximum. The span is the distance from the defining line to
//! the deepest line any node in the body reaches; a definition with no body
//! spans zero lines.

use crate::ast::NodeKind;
use crate::config::RulesConfig;
use crate::detectors::base::{Detector, SourceUnit};
use crate::models::{Finding, SmellKind};
use anyhow::Result;

pub struct LongMethodDetector;

impl Detector for LongMethodDetector {
    fn kind(&self) -> SmellKind {
        SmellKind::LongMethod
    }

    fn description(&self) -> &'static str {
        "Detects methods with too many lines"
    }

    fn detect(&self, unit: &SourceUnit<'_>, config: &RulesConfig) -> Result<Vec<Finding>> {
        let rule = &config.long_method;
        let mut findings = Vec::new();

        for node in unit.tree.walk() {
            let NodeKind::FunctionDef { name, .. } = &node.kind else {
                continue;
            };
            let lines = node.line_span() as usize;
            if lines > rule.max_lines {
                findings.push(Finding::new(
                    self.kind(),
                    unit.path,
                    node.line,
                    format!(
                        "Method '{}' has {} lines (max: {})",
                        name, lines, rule.max_lines
                    ),
                    rule.severity,
                ));
            }
        }

        Ok(findings)
    }
}
