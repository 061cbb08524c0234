//! # hello-embedded Entry Point
//!
//! Sets up logging, then runs the image diagnostics once and exits.

use anyhow::Result;
use hello_embedded::cli::Cli;
use hello_embedded::diagnostics::run_diagnostics;
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
  let cli = Cli::parse_lenient();

  // Logs go to stderr so stdout carries only the report
  let level = cli.log_level();
  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  debug!("Tracing initialized with level: {}", level);

  cli.colors.apply();

  run_diagnostics()
}
