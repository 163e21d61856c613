//! Code smell detectors
//!
//! This module provides the detector framework and the six rule
//! implementations.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                   DetectionEngine                       │
//! │  - Holds the effective rule configuration               │
//! │  - Resolves the run set (only/exclude + enablement)     │
//! │  - Parses each file and dispatches detectors in order   │
//! │  - Collects findings, isolates per-detector failures    │
//! └─────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                    Detector Trait                       │
//! │  - kind(): smell category                               │
//! │  - description(): human-readable description            │
//! │  - detect(unit, config): run detection over one file    │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Detectors run in a fixed order: long_method, god_class, duplicated_code,
//! large_parameter_list, magic_numbers, feature_envy. Five of them walk the
//! parsed tree; duplicated_code scans the raw text.

mod base;
mod engine;

mod duplicated_code;
mod feature_envy;
mod god_class;
mod large_parameter_list;
mod long_method;
mod magic_numbers;

pub use base::{Detector, SourceUnit};
pub use engine::{DetectionEngine, RunOutcome};

use duplicated_code::DuplicatedCodeDetector;
use feature_envy::FeatureEnvyDetector;
use god_class::GodClassDetector;
use large_parameter_list::LargeParameterListDetector;
use long_method::LongMethodDetector;
use magic_numbers::MagicNumbersDetector;

/// All six detectors, in the fixed run order
pub fn all_detectors() -> Vec<Box<dyn Detector>> {
    vec![
        Box::new(LongMethodDetector),
        Box::new(GodClassDetector),
        Box::new(DuplicatedCodeDetector),
        Box::new(LargeParameterListDetector),
        Box::new(MagicNumbersDetector),
        Box::new(FeatureEnvyDetector),
    ]
}
