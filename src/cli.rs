//! CLI definition and the analysis run loop

use crate::config::RulesConfig;
use crate::detectors::DetectionEngine;
use crate::models::FindingsSummary;
use crate::reporters::{self, OutputFormat};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, warn};

/// Smelt - code smell detection for Python source
#[derive(Parser, Debug)]
#[command(name = "smelt")]
#[command(
    version,
    about = "Detect code smells in Python source code",
    after_help = "\
Examples:
  smelt app/models.py                      Analyze a single file
  smelt src/                               Analyze a directory tree
  smelt --config smelt.toml src/           Use custom thresholds
  smelt --only long_method,god_class src/  Run specific detectors
  smelt --exclude magic_numbers src/       Skip specific detectors
  smelt --format json -o report.json src/  Machine-readable report

Exit status: 0 = clean, 1 = findings, 2 = high-severity findings"
)]
pub struct Cli {
    /// Python file or directory to analyze
    pub target: PathBuf,

    /// Path to a TOML configuration file with rule overrides
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Only run these detectors (comma-separated rule names)
    #[arg(long, value_delimiter = ',', value_name = "SMELLS")]
    pub only: Option<Vec<String>>,

    /// Skip these detectors (comma-separated rule names)
    #[arg(long, value_delimiter = ',', value_name = "SMELLS")]
    pub exclude: Option<Vec<String>>,

    /// Output format
    #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json", "csv"])]
    pub format: String,

    /// Write the report to a file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

/// Run the analysis and return the process exit code
pub fn run(cli: Cli) -> Result<i32> {
    let config = RulesConfig::load(cli.config.as_deref());
    let engine = DetectionEngine::new(config);

    let files = find_python_files(&cli.target)?;
    if files.is_empty() {
        println!("No Python files found in {}", cli.target.display());
        return Ok(1);
    }
    info!("Analyzing {} Python files", files.len());

    let outcome = engine.analyze_files(&files, cli.only.as_deref(), cli.exclude.as_deref());
    for (path, error) in &outcome.failures {
        warn!("Skipped {}: {error:#}", path.display());
    }

    let format = OutputFormat::from_str(&cli.format)?;
    let report = reporters::render(&outcome.findings, format)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &report)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!("Report saved to {}", path.display());
        }
        None => print!("{report}"),
    }

    Ok(FindingsSummary::from_findings(&outcome.findings).exit_code())
}

/// Collect the Python files under `target`, sorted for a stable run order.
/// A file target is taken as-is when it has a `.py` extension; a directory
/// is walked recursively.
pub fn find_python_files(target: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    if target.is_file() {
        if target.extension().and_then(|e| e.to_str()) == Some("py") {
            files.push(target.to_path_buf());
        }
        return Ok(files);
    }

    let walker = ignore::WalkBuilder::new(target)
        .hidden(false)
        .git_ignore(true)
        .build();
    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("py") {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_python_files_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.py");
        fs::write(&file, "x = 1\n").unwrap();
        let found = find_python_files(&file).unwrap();
        assert_eq!(found, vec![file]);
    }

    #[test]
    fn test_find_python_files_ignores_non_python_file_target() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        fs::write(&file, "hello\n").unwrap();
        assert!(find_python_files(&file).unwrap().is_empty());
    }

    #[test]
    fn test_find_python_files_walks_directory_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("pkg")).unwrap();
        fs::write(dir.path().join("b.py"), "x = 1\n").unwrap();
        fs::write(dir.path().join("a.py"), "x = 1\n").unwrap();
        fs::write(dir.path().join("pkg/c.py"), "x = 1\n").unwrap();
        fs::write(dir.path().join("README.md"), "docs\n").unwrap();

        let found = find_python_files(dir.path()).unwrap();
        let names: Vec<String> = found
            .iter()
            .map(|p| {
                p.strip_prefix(dir.path())
                    .unwrap()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        assert_eq!(names, vec!["a.py", "b.py", "pkg/c.py"]);
    }
}
