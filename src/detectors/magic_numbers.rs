//! Magic number detector
//!
//! Flags numeric literals outside a small allow-list of conventional values.
//! Literals whose immediate parent is an import statement are skipped; every
//! other position is reported. Severity and suggestion are fixed per run.

use crate::ast::{NodeKind, NumberValue};
use crate::config::RulesConfig;
use crate::detectors::base::{Detector, SourceUnit};
use crate::models::{Finding, SmellKind};
use anyhow::Result;

/// Values conventional enough to not need a name
const ALLOWED: [f64; 7] = [0.0, 1.0, -1.0, 2.0, 10.0, 100.0, 1000.0];

fn is_allowed(value: NumberValue) -> bool {
    let v = value.as_f64();
    ALLOWED.iter().any(|a| *a == v)
}

pub struct MagicNumbersDetector;

impl Detector for MagicNumbersDetector {
    fn kind(&self) -> SmellKind {
        SmellKind::MagicNumbers
    }

    fn description(&self) -> &'static str {
        "Detects unexplained numeric literals"
    }

    fn detect(&self, unit: &SourceUnit<'_>, config: &RulesConfig) -> Result<Vec<Finding>> {
        let rule = &config.magic_numbers;
        let mut findings = Vec::new();

        unit.tree.walk_with_parent(&mut |parent, node| {
            let NodeKind::Number(value) = &node.kind else {
                return;
            };
            let value = *value;
            if is_allowed(value) {
                return;
            }
            if matches!(parent, Some(NodeKind::Import)) {
                return;
            }
            findings.push(Finding::new(
                self.kind(),
                unit.path,
                node.line,
                format!("Magic number {value} found"),
                rule.severity,
            ));
        });

        Ok(findings)
    }
}
