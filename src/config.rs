//! Effective rule configuration
//!
//! Built once per run by overlaying an optional TOML override file onto the
//! built-in defaults, then shared read-only by every detector and file.
//!
//! Merging is per-field: a table like `[long_method]\nmax_lines = 100` only
//! replaces `max_lines`; `enabled` and `severity` keep their defaults.
//! Unknown tables and keys are ignored. A missing, unreadable, or malformed
//! file falls back to pure defaults with a warning - configuration problems
//! never abort analysis.

use crate::models::{Severity, SmellKind};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Per-rule thresholds and enablement for all six detectors
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RulesConfig {
    pub long_method: LongMethodRule,
    pub god_class: GodClassRule,
    pub duplicated_code: DuplicatedCodeRule,
    pub large_parameter_list: LargeParameterListRule,
    pub magic_numbers: MagicNumbersRule,
    pub feature_envy: FeatureEnvyRule,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LongMethodRule {
    pub enabled: bool,
    pub max_lines: usize,
    pub severity: Severity,
}

impl Default for LongMethodRule {
    fn default() -> Self {
        Self {
            enabled: true,
            max_lines: 20,
            severity: Severity::High,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GodClassRule {
    pub enabled: bool,
    pub max_methods: usize,
    pub max_attributes: usize,
    pub severity: Severity,
}

impl Default for GodClassRule {
    fn default() -> Self {
        Self {
            enabled: true,
            max_methods: 10,
            max_attributes: 15,
            severity: Severity::High,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DuplicatedCodeRule {
    pub enabled: bool,
    pub min_similarity: f64,
    pub min_lines: usize,
    pub severity: Severity,
}

impl Default for DuplicatedCodeRule {
    fn default() -> Self {
        Self {
            enabled: true,
            min_similarity: 0.8,
            min_lines: 5,
            severity: Severity::Medium,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LargeParameterListRule {
    pub enabled: bool,
    pub max_parameters: usize,
    pub severity: Severity,
}

impl Default for LargeParameterListRule {
    fn default() -> Self {
        Self {
            enabled: true,
            max_parameters: 5,
            severity: Severity::Medium,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MagicNumbersRule {
    pub enabled: bool,
    pub severity: Severity,
}

impl Default for MagicNumbersRule {
    fn default() -> Self {
        Self {
            enabled: true,
            severity: Severity::Low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FeatureEnvyRule {
    pub enabled: bool,
    pub max_external_calls: usize,
    pub severity: Severity,
}

impl Default for FeatureEnvyRule {
    fn default() -> Self {
        Self {
            enabled: true,
            max_external_calls: 3,
            severity: Severity::Medium,
        }
    }
}

impl RulesConfig {
    /// Load configuration, overlaying `path` (if given) onto the defaults.
    ///
    /// Never fails: any problem reading or parsing the file is logged and
    /// the defaults are used instead.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(
                    "Could not read config file {}: {} - using defaults",
                    path.display(),
                    e
                );
                return Self::default();
            }
        };

        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Could not parse config file {}: {} - using defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Whether the rule for `kind` is enabled
    pub fn is_enabled(&self, kind: SmellKind) -> bool {
        match kind {
            SmellKind::LongMethod => self.long_method.enabled,
            SmellKind::GodClass => self.god_class.enabled,
            SmellKind::DuplicatedCode => self.duplicated_code.enabled,
            SmellKind::LargeParameterList => self.large_parameter_list.enabled,
            SmellKind::MagicNumbers => self.magic_numbers.enabled,
            SmellKind::FeatureEnvy => self.feature_envy.enabled,
        }
    }

    /// Configured severity for `kind`
    pub fn severity(&self, kind: SmellKind) -> Severity {
        match kind {
            SmellKind::LongMethod => self.long_method.severity,
            SmellKind::GodClass => self.god_class.severity,
            SmellKind::DuplicatedCode => self.duplicated_code.severity,
            SmellKind::LargeParameterList => self.large_parameter_list.severity,
            SmellKind::MagicNumbers => self.magic_numbers.severity,
            SmellKind::FeatureEnvy => self.feature_envy.severity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = RulesConfig::default();
        assert!(config.long_method.enabled);
        assert_eq!(config.long_method.max_lines, 20);
        assert_eq!(config.long_method.severity, Severity::High);
        assert_eq!(config.god_class.max_methods, 10);
        assert_eq!(config.god_class.max_attributes, 15);
        assert!((config.duplicated_code.min_similarity - 0.8).abs() < f64::EPSILON);
        assert_eq!(config.duplicated_code.min_lines, 5);
        assert_eq!(config.large_parameter_list.max_parameters, 5);
        assert_eq!(config.magic_numbers.severity, Severity::Low);
        assert_eq!(config.feature_envy.max_external_calls, 3);
        for kind in SmellKind::ALL {
            assert!(config.is_enabled(kind));
        }
    }

    #[test]
    fn test_partial_override_merges_per_field() {
        let config: RulesConfig = toml::from_str(
            r#"
[long_method]
max_lines = 100
"#,
        )
        .unwrap();
        // Overridden field
        assert_eq!(config.long_method.max_lines, 100);
        // Sibling fields in the same table keep their defaults
        assert!(config.long_method.enabled);
        assert_eq!(config.long_method.severity, Severity::High);
        // Other tables keep their defaults
        assert_eq!(config.god_class.max_methods, 10);
        assert_eq!(config.god_class.max_attributes, 15);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config: RulesConfig = toml::from_str(
            r#"
[not_a_rule]
max_lines = 5

[magic_numbers]
enabled = false
unknown_threshold = 42
"#,
        )
        .unwrap();
        assert!(!config.magic_numbers.enabled);
        assert_eq!(config, {
            let mut expected = RulesConfig::default();
            expected.magic_numbers.enabled = false;
            expected
        });
    }

    #[test]
    fn test_severity_override_parses_lowercase() {
        let config: RulesConfig = toml::from_str(
            r#"
[feature_envy]
severity = "high"
max_external_calls = 1
"#,
        )
        .unwrap();
        assert_eq!(config.feature_envy.severity, Severity::High);
        assert_eq!(config.severity(SmellKind::FeatureEnvy), Severity::High);
        assert_eq!(config.feature_envy.max_external_calls, 1);
    }

    #[test]
    fn test_load_without_path_returns_defaults() {
        assert_eq!(RulesConfig::load(None), RulesConfig::default());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let config = RulesConfig::load(Some(Path::new("/nonexistent/smelt.toml")));
        assert_eq!(config, RulesConfig::default());
    }

    #[test]
    fn test_load_malformed_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "this is [[ not valid toml {{{{").unwrap();
        let config = RulesConfig::load(Some(file.path()));
        assert_eq!(config, RulesConfig::default());
    }

    #[test]
    fn test_load_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[god_class]\nmax_methods = 3").unwrap();
        let config = RulesConfig::load(Some(file.path()));
        assert_eq!(config.god_class.max_methods, 3);
        assert_eq!(config.god_class.max_attributes, 15);
    }
}
