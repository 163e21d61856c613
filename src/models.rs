//! Core data models for Smelt
//!
//! These models are used throughout the codebase for representing
//! detected smells and analysis results.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity levels for findings
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

/// The six smell categories Smelt can detect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmellKind {
    LongMethod,
    GodClass,
    DuplicatedCode,
    LargeParameterList,
    MagicNumbers,
    FeatureEnvy,
}

impl SmellKind {
    /// All categories, in the fixed order detectors run in
    pub const ALL: [SmellKind; 6] = [
        SmellKind::LongMethod,
        SmellKind::GodClass,
        SmellKind::DuplicatedCode,
        SmellKind::LargeParameterList,
        SmellKind::MagicNumbers,
        SmellKind::FeatureEnvy,
    ];

    /// Canonical rule name, used as the config key and for --only/--exclude
    pub fn name(self) -> &'static str {
        match self {
            SmellKind::LongMethod => "long_method",
            SmellKind::GodClass => "god_class",
            SmellKind::DuplicatedCode => "duplicated_code",
            SmellKind::LargeParameterList => "large_parameter_list",
            SmellKind::MagicNumbers => "magic_numbers",
            SmellKind::FeatureEnvy => "feature_envy",
        }
    }

    /// Human-readable category name for reports
    pub fn display_name(self) -> &'static str {
        match self {
            SmellKind::LongMethod => "Long Method",
            SmellKind::GodClass => "God Class",
            SmellKind::DuplicatedCode => "Duplicated Code",
            SmellKind::LargeParameterList => "Large Parameter List",
            SmellKind::MagicNumbers => "Magic Number",
            SmellKind::FeatureEnvy => "Feature Envy",
        }
    }

    /// Fixed advisory text attached to every finding of this category
    pub fn suggestion(self) -> &'static str {
        match self {
            SmellKind::LongMethod => {
                "Consider breaking this method into smaller, more focused methods."
            }
            SmellKind::GodClass => {
                "Consider splitting this class into smaller, more focused classes."
            }
            SmellKind::DuplicatedCode => {
                "Extract this code into a separate function to avoid duplication."
            }
            SmellKind::LargeParameterList => {
                "Consider using a parameter object or data class to group related parameters."
            }
            SmellKind::MagicNumbers => "Replace with a named constant to improve readability.",
            SmellKind::FeatureEnvy => {
                "Consider moving this method to the class it's most interested in."
            }
        }
    }

    /// Look up a category by its canonical rule name
    pub fn from_name(name: &str) -> Option<SmellKind> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }
}

impl std::fmt::Display for SmellKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One detected smell instance
///
/// Created inside a detector during a single pass over one file and never
/// mutated afterwards. These fields are the entire contract with reporters.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// Smell category
    #[serde(rename = "type")]
    pub kind: SmellKind,
    /// File the smell was found in
    pub file: PathBuf,
    /// 1-based line the smell is anchored at
    pub line: u32,
    /// Human-readable description built from measured values and thresholds
    pub description: String,
    /// Severity from the rule's configuration
    pub severity: Severity,
    /// Fixed advisory text for the category
    pub suggestion: String,
}

impl Finding {
    /// Build a finding for `kind`, filling in the category's fixed suggestion
    pub fn new(
        kind: SmellKind,
        file: impl Into<PathBuf>,
        line: u32,
        description: String,
        severity: Severity,
    ) -> Self {
        Self {
            kind,
            file: file.into(),
            line,
            description,
            severity,
            suggestion: kind.suggestion().to_string(),
        }
    }
}

/// Summary of findings by severity
#[derive(Debug, Clone, Default, Serialize)]
pub struct FindingsSummary {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub total: usize,
}

impl FindingsSummary {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut summary = Self::default();
        for f in findings {
            match f.severity {
                Severity::High => summary.high += 1,
                Severity::Medium => summary.medium += 1,
                Severity::Low => summary.low += 1,
            }
            summary.total += 1;
        }
        summary
    }

    /// Process exit status expected by callers:
    /// 0 = clean, 1 = findings but none high, 2 = high-severity findings
    pub fn exit_code(&self) -> i32 {
        if self.high > 0 {
            2
        } else if self.total > 0 {
            1
        } else {
            0
        }
    }
}

/// Group findings by smell category, preserving detection order within each
/// category. Categories appear in the fixed detector order; empty categories
/// are omitted. Presentation only - selection logic never uses this view.
pub fn group_by_kind(findings: &[Finding]) -> Vec<(SmellKind, Vec<&Finding>)> {
    SmellKind::ALL
        .iter()
        .filter_map(|&kind| {
            let group: Vec<&Finding> = findings.iter().filter(|f| f.kind == kind).collect();
            if group.is_empty() {
                None
            } else {
                Some((kind, group))
            }
        })
        .collect()
}
