//! Large parameter list detector
//!
//! Counts a function's plain positional parameters. Default-valued,
//! keyword-only, and variadic parameters are excluded from the count.

use crate::ast::{NodeKind, ParamKind};
use crate::config::RulesConfig;
use crate::detectors::base::{Detector, SourceUnit};
use crate::models::{Finding, SmellKind};
use anyhow::Result;

pub struct LargeParameterListDetector;

impl Detector for LargeParameterListDetector {
    fn kind(&self) -> SmellKind {
        SmellKind::LargeParameterList
    }

    fn description(&self) -> &'static str {
        "Detects methods with too many parameters"
    }

    fn detect(&self, unit: &SourceUnit<'_>, config: &RulesConfig) -> Result<Vec<Finding>> {
        let rule = &config.large_parameter_list;
        let mut findings = Vec::new();

        for node in unit.tree.walk() {
            let NodeKind::FunctionDef { name, params } = &node.kind else {
                continue;
            };
            let param_count = params
                .iter()
                .filter(|p| p.kind == ParamKind::Positional)
                .count();
            if param_count > rule.max_parameters {
                findings.push(Finding::new(
                    self.kind(),
                    unit.path,
                    node.line,
                    format!(
                        "Method '{}' has {} parameters (max: {})",
                        name, param_count, rule.max_parameters
                    ),
                    rule.severity,
                ));
            }
        }

        Ok(findings)
    }
}
