//! Smelt - code smell detection for Python source
//!
//! Parses Python files into a generic syntax tree and runs a configurable
//! suite of six detectors to find maintainability smells: long methods,
//! god classes, duplicated code, large parameter lists, magic numbers,
//! and feature envy.

use anyhow::Result;
use clap::Parser;
use smelt::cli::{self, Cli};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over --log-level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone()));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let code = cli::run(cli)?;
    std::process::exit(code);
}
