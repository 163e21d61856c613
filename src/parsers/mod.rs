//! Language front ends
//!
//! A front end turns source text into the generic [`crate::ast::SyntaxNode`]
//! tree the detectors consume. Python is the only supported language.

pub mod python;

pub use python::{parse_file, parse_source};
