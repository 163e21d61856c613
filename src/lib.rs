//! Smelt - code smell detection for Python source
//!
//! Smelt parses Python files into a small generic syntax tree and runs a
//! configurable suite of six detectors over it (and over the raw text, for
//! duplication). Each detector is a pure function of one file's contents and
//! the effective rule configuration; the engine collects findings across
//! detectors and files and hands them to a reporter.

pub mod ast;
pub mod cli;
pub mod config;
pub mod detectors;
pub mod error;
pub mod models;
pub mod parsers;
pub mod reporters;
