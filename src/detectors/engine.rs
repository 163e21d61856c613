//! Detection engine: run-set resolution and per-file dispatch
//!
//! The engine owns the effective rule configuration and the detector
//! registry. For each file it parses the source, assembles a [`SourceUnit`],
//! and invokes the selected detectors sequentially in registry order.
//! Failures are contained at two levels: a detector returning an error is
//! logged and skipped for that file, and a file that cannot be read or
//! parsed is recorded without aborting the rest of the run.

use crate::config::RulesConfig;
use crate::detectors::base::{Detector, SourceUnit};
use crate::detectors::all_detectors;
use crate::models::{Finding, SmellKind};
use crate::parsers;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

/// Result of analyzing a batch of files
#[derive(Debug, Default)]
pub struct RunOutcome {
    /// Findings in detector-invocation order within each file, in
    /// file-processing order across files
    pub findings: Vec<Finding>,
    /// Files that could not be analyzed, with the reason
    pub failures: Vec<(PathBuf, anyhow::Error)>,
}

pub struct DetectionEngine {
    config: RulesConfig,
    detectors: Vec<Box<dyn Detector>>,
}

impl DetectionEngine {
    pub fn new(config: RulesConfig) -> Self {
        Self {
            config,
            detectors: all_detectors(),
        }
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Resolve which detectors run for this invocation.
    ///
    /// With an `only` list, the run set is the listed categories that exist
    /// and are enabled in configuration, in list order - a category disabled
    /// in configuration never runs, even when explicitly requested.
    /// Otherwise every enabled detector runs, in registry order, minus any
    /// named in `exclude`. Unknown names in either list are ignored.
    pub fn selected_detectors(
        &self,
        only: Option<&[String]>,
        exclude: Option<&[String]>,
    ) -> Vec<&dyn Detector> {
        match only {
            Some(names) if !names.is_empty() => names
                .iter()
                .filter_map(|name| SmellKind::from_name(name))
                .filter(|kind| self.config.is_enabled(*kind))
                .filter_map(|kind| self.detector_for(kind))
                .collect(),
            _ => {
                let excluded: HashSet<&str> = exclude
                    .map(|names| names.iter().map(String::as_str).collect())
                    .unwrap_or_default();
                self.detectors
                    .iter()
                    .map(|d| d.as_ref())
                    .filter(|d| self.config.is_enabled(d.kind()))
                    .filter(|d| !excluded.contains(d.name()))
                    .collect()
            }
        }
    }

    fn detector_for(&self, kind: SmellKind) -> Option<&dyn Detector> {
        self.detectors
            .iter()
            .map(|d| d.as_ref())
            .find(|d| d.kind() == kind)
    }

    /// Analyze in-memory source as if it were the file at `path`
    pub fn analyze_source(
        &self,
        source: &str,
        path: &Path,
        only: Option<&[String]>,
        exclude: Option<&[String]>,
    ) -> Result<Vec<Finding>> {
        let tree = parsers::parse_source(source, path)?;
        let unit = SourceUnit {
            path,
            source,
            tree: &tree,
        };

        let mut findings = Vec::new();
        for detector in self.selected_detectors(only, exclude) {
            match detector.detect(&unit, &self.config) {
                Ok(mut batch) => {
                    debug!(
                        detector = detector.name(),
                        file = %path.display(),
                        count = batch.len(),
                        "detector finished"
                    );
                    findings.append(&mut batch);
                }
                // A misbehaving detector must not take down the rest of
                // the suite for this file.
                Err(e) => warn!(
                    detector = detector.name(),
                    file = %path.display(),
                    "detector failed, skipping: {e:#}"
                ),
            }
        }
        Ok(findings)
    }

    /// Analyze one file on disk
    pub fn analyze_file(
        &self,
        path: &Path,
        only: Option<&[String]>,
        exclude: Option<&[String]>,
    ) -> Result<Vec<Finding>> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        self.analyze_source(&source, path, only, exclude)
    }

    /// Analyze a batch of files sequentially, in the given order.
    /// A file that fails to read or parse contributes zero findings and is
    /// recorded in the outcome; the remaining files are still analyzed.
    pub fn analyze_files(
        &self,
        files: &[PathBuf],
        only: Option<&[String]>,
        exclude: Option<&[String]>,
    ) -> RunOutcome {
        let mut outcome = RunOutcome::default();
        for path in files {
            match self.analyze_file(path, only, exclude) {
                Ok(mut findings) => outcome.findings.append(&mut findings),
                Err(e) => {
                    error!("Error analyzing {}: {e:#}", path.display());
                    outcome.failures.push((path.clone(), e));
                }
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> DetectionEngine {
        DetectionEngine::new(RulesConfig::default())
    }

    fn names(detectors: &[&dyn Detector]) -> Vec<&'static str> {
        detectors.iter().map(|d| d.name()).collect()
    }

    #[test]
    fn test_default_run_set_is_all_enabled() {
        let engine = engine();
        let selected = engine.selected_detectors(None, None);
        assert_eq!(selected.len(), 6);
    }

    #[test]
    fn test_only_preserves_list_order() {
        let engine = engine();
        let only = vec!["magic_numbers".to_string(), "long_method".to_string()];
        let selected = engine.selected_detectors(Some(&only), None);
        assert_eq!(names(&selected), vec!["magic_numbers", "long_method"]);
    }

    #[test]
    fn test_only_ignores_unknown_names() {
        let engine = engine();
        let only = vec!["no_such_rule".to_string(), "god_class".to_string()];
        let selected = engine.selected_detectors(Some(&only), None);
        assert_eq!(names(&selected), vec!["god_class"]);
    }

    #[test]
    fn test_only_is_gated_by_enablement() {
        let mut config = RulesConfig::default();
        config.magic_numbers.enabled = false;
        let engine = DetectionEngine::new(config);
        let only = vec!["magic_numbers".to_string()];
        assert!(engine.selected_detectors(Some(&only), None).is_empty());
    }

    #[test]
    fn test_empty_only_behaves_as_absent() {
        let engine = engine();
        let only: Vec<String> = vec![];
        assert_eq!(engine.selected_detectors(Some(&only), None).len(), 6);
    }

    #[test]
    fn test_exclude_removes_from_run_set() {
        let engine = engine();
        let exclude = vec!["magic_numbers".to_string(), "unknown".to_string()];
        let selected = engine.selected_detectors(None, Some(&exclude));
        assert_eq!(
            names(&selected),
            vec![
                "long_method",
                "god_class",
                "duplicated_code",
                "large_parameter_list",
                "feature_envy",
            ]
        );
    }

    #[test]
    fn test_disabled_rule_not_in_default_run_set() {
        let mut config = RulesConfig::default();
        config.feature_envy.enabled = false;
        let engine = DetectionEngine::new(config);
        let selected = engine.selected_detectors(None, None);
        assert_eq!(selected.len(), 5);
        assert!(!names(&selected).contains(&"feature_envy"));
    }

    #[test]
    fn test_empty_module_yields_no_findings() {
        let engine = engine();
        let findings = engine
            .analyze_source("", Path::new("empty.py"), None, None)
            .expect("analyze");
        assert!(findings.is_empty());
    }

    #[test]
    fn test_analyze_source_rejects_bad_syntax() {
        let engine = engine();
        let result = engine.analyze_source("def f(:\n", Path::new("bad.py"), None, None);
        assert!(result.is_err());
    }

    #[test]
    fn test_findings_follow_detector_order() {
        // One long method with a magic number inside: long_method runs
        // before magic_numbers, so its finding comes first.
        let mut source = String::from("def f():\n    x = 42\n");
        for i in 0..25 {
            source.push_str(&format!("    a{i} = b{i}\n"));
        }
        let engine = engine();
        let findings = engine
            .analyze_source(&source, Path::new("ordered.py"), None, None)
            .expect("analyze");
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].kind, SmellKind::LongMethod);
        assert_eq!(findings[1].kind, SmellKind::MagicNumbers);
    }
}
