//! Base detector trait and per-file input

use crate::ast::SyntaxNode;
use crate::config::RulesConfig;
use crate::models::{Finding, SmellKind};
use anyhow::Result;
use std::path::Path;

/// Everything a detector may look at for one file: the parsed tree for the
/// structural rules and the raw text for the textual ones. Assembled by the
/// engine before any detector runs; detectors perform no I/O.
#[derive(Debug, Clone, Copy)]
pub struct SourceUnit<'a> {
    pub path: &'a Path,
    pub source: &'a str,
    pub tree: &'a SyntaxNode,
}

/// Trait for all code smell detectors
///
/// Each implementation is a pure function of one file's contents and the
/// effective rule configuration. Detectors return their findings; they never
/// accumulate state across invocations, so the engine stays reentrant.
pub trait Detector: Send + Sync {
    /// The smell category this detector reports
    fn kind(&self) -> SmellKind;

    /// Canonical rule name (config key and --only/--exclude name)
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Human-readable description of what this detector finds
    fn description(&self) -> &'static str;

    /// Run detection over one file and return findings
    fn detect(&self, unit: &SourceUnit<'_>, config: &RulesConfig) -> Result<Vec<Finding>>;
}
