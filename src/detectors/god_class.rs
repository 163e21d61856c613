//! God class detector
//!
//! Flags classes carrying too many direct methods or too many direct
//! attribute assignments. Either dimension alone is enough; the condition
//! is an OR, not an AND. Only direct children count - nested classes and
//! methods of nested classes are measured against their own parent.

use crate::ast::NodeKind;
use crate::config::RulesConfig;
use crate::detectors::base::{Detector, SourceUnit};
use crate::models::{Finding, SmellKind};
use anyhow::Result;

pub struct GodClassDetector;

impl Detector for GodClassDetector {
    fn kind(&self) -> SmellKind {
        SmellKind::GodClass
    }

    fn description(&self) -> &'static str {
        "Detects classes with too many methods or attributes"
    }

    fn detect(&self, unit: &SourceUnit<'_>, config: &RulesConfig) -> Result<Vec<Finding>> {
        let rule = &config.god_class;
        let mut findings = Vec::new();

        for node in unit.tree.walk() {
            let NodeKind::ClassDef { name } = &node.kind else {
                continue;
            };
            let method_count =
                node.count_direct_children(|k| matches!(k, NodeKind::FunctionDef { .. }));
            let attribute_count = node.count_direct_children(|k| matches!(k, NodeKind::Assign));

            if method_count > rule.max_methods || attribute_count > rule.max_attributes {
                findings.push(Finding::new(
                    self.kind(),
                    unit.path,
                    node.line,
                    format!(
                        "Class '{}' has {} methods and {} attributes (max: {} methods, {} attributes)",
                        name, method_count, attribute_count, rule.max_methods, rule.max_attributes
                    ),
                    rule.severity,
                ));
            }
        }

        Ok(findings)
    }
}
