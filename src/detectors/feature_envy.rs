//! Feature envy detector
//!
//! Counts, per function, the calls made through a member access on a simple
//! identifier receiver (`obj.method()`). Too many of them suggests the
//! function talks more to another object than to its own.
//!
//! Known imprecision, kept deliberately: the receiver is not verified to be
//! external. Locals holding object references count, and `self` would too if
//! it appeared as a call receiver. Chained or computed receivers
//! (`a.b.method()`, `get(x).method()`) do not count.

use crate::ast::NodeKind;
use crate::config::RulesConfig;
use crate::detectors::base::{Detector, SourceUnit};
use crate::models::{Finding, SmellKind};
use anyhow::Result;

pub struct FeatureEnvyDetector;

impl Detector for FeatureEnvyDetector {
    fn kind(&self) -> SmellKind {
        SmellKind::FeatureEnvy
    }

    fn description(&self) -> &'static str {
        "Detects methods making too many calls on other objects"
    }

    fn detect(&self, unit: &SourceUnit<'_>, config: &RulesConfig) -> Result<Vec<Finding>> {
        let rule = &config.feature_envy;
        let mut findings = Vec::new();

        for node in unit.tree.walk() {
            let NodeKind::FunctionDef { name, .. } = &node.kind else {
                continue;
            };
            let external_calls = node
                .walk()
                .filter(|n| matches!(&n.kind, NodeKind::Call { receiver: Some(_) }))
                .count();
            if external_calls > rule.max_external_calls {
                findings.push(Finding::new(
                    self.kind(),
                    unit.path,
                    node.line,
                    format!(
                        "Method '{}' makes {} external calls (max: {})",
                        name, external_calls, rule.max_external_calls
                    ),
                    rule.severity,
                ));
            }
        }

        Ok(findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::parse_source;
    use std::path::Path;

    fn detect(source: &str, config: &RulesConfig) -> Vec<Finding> {
        let tree = parse_source(source, Path::new("test.py")).expect("parse");
        let unit = SourceUnit {
            path: Path::new("test.py"),
            source,
            tree: &tree,
        };
        FeatureEnvyDetector.detect(&unit, config).expect("detect")
    }

    #[test]
    fn test_at_threshold_is_quiet() {
        let source = "\
def sync(db):
    db.open()
    db.write()
    db.close()
";
        assert!(detect(source, &RulesConfig::default()).is_empty());
    }

    #[test]
    fn test_over_threshold_triggers() {
        let source = "\
def sync(db):
    db.open()
    db.write()
    db.flush()
    db.close()
";
        let findings = detect(source, &RulesConfig::default());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 1);
        assert_eq!(
            findings[0].description,
            "Method 'sync' makes 4 external calls (max: 3)"
        );
    }

    #[test]
    fn test_plain_and_chained_calls_do_not_count() {
        let source = "\
def work(item):
    helper()
    other()
    build().finish()
    factory().make().run()
    item.save()
";
        assert!(detect(source, &RulesConfig::default()).is_empty());
    }

    #[test]
    fn test_local_receivers_count() {
        // Known heuristic limitation: locals that merely hold object
        // references are counted like any other receiver.
        let mut config = RulesConfig::default();
        config.feature_envy.max_external_calls = 1;
        let source = "\
def work():
    buf = make_buffer()
    buf.push(item)
    buf.flush()
";
        let findings = detect(source, &config);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].description.contains("2 external calls"));
    }
}
