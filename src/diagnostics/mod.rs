//! # Image Diagnostics
//!
//! Prints the layer banner, runs the kernel, CPU and memory commands under
//! their section headers, and closes with a confirmation line. Command
//! failures never stop the report: whatever the shell prints is passed
//! through and the next step runs.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::consts;
use crate::output::{write_banner, write_closing, write_header};
use crate::shell::{ShellExecutor, SystemShell};

/// One report section: a header and the shell command whose output follows it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticStep {
  pub header: &'static str,
  pub command: &'static str,
}

impl DiagnosticStep {
  pub const fn new(header: &'static str, command: &'static str) -> Self {
    Self { header, command }
  }

  /// Kernel, CPU and memory sections, in report order
  pub const fn defaults() -> [Self; 3] {
    [
      Self::new(consts::KERNEL_HEADER, consts::KERNEL_COMMAND),
      Self::new(consts::CPU_HEADER, consts::CPU_COMMAND),
      Self::new(consts::MEMORY_HEADER, consts::MEMORY_COMMAND),
    ]
  }
}

/// Runs the fixed report against a shell executor
pub struct DiagnosticRunner<E> {
  executor: E,
  steps: Vec<DiagnosticStep>,
}

impl<E: ShellExecutor> DiagnosticRunner<E> {
  /// Create a runner over the default kernel/CPU/memory steps
  pub fn new(executor: E) -> Self {
    Self::with_steps(executor, DiagnosticStep::defaults())
  }

  /// Create a runner over an explicit list of steps
  pub fn with_steps(executor: E, steps: impl IntoIterator<Item = DiagnosticStep>) -> Self {
    Self {
      executor,
      steps: steps.into_iter().collect(),
    }
  }

  pub fn steps(&self) -> &[DiagnosticStep] {
    &self.steps
  }

  /// Write the report to `out`.
  ///
  /// `out` is flushed before every command so the runner's own text always
  /// precedes the child's output on a shared stream. Only a failure to write
  /// to `out` is returned as an error.
  pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
    write_banner(out).context("Failed to write banner")?;

    for step in &self.steps {
      write_header(out, step.header).with_context(|| format!("Failed to write header '{}'", step.header))?;
      out.flush().context("Failed to flush output before running command")?;

      debug!(command = step.command, "Running diagnostic command");
      match self.executor.execute(step.command) {
        Ok(outcome) if outcome.success() => debug!(command = step.command, %outcome, "Command finished"),
        Ok(outcome) => info!(command = step.command, %outcome, "Command did not succeed"),
        Err(e) => warn!(command = step.command, error = %e, "Command could not be started"),
      }
    }

    write_closing(out).context("Failed to write closing line")?;
    out.flush().context("Failed to flush output")?;

    Ok(())
  }
}

/// Run the image diagnostics on stdout using the system shell
pub fn run_diagnostics() -> Result<()> {
  let shell = SystemShell::default();
  debug!(shell = shell.shell(), "Starting diagnostics");

  let runner = DiagnosticRunner::new(shell);
  let stdout = io::stdout();
  let mut out = stdout.lock();
  runner.run(&mut out)
}
