//! # Shell Command Execution
//!
//! Spawns diagnostic commands through the platform shell with the parent's
//! standard streams inherited, so child output lands directly in the report.

use std::fmt;
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

use crate::consts;

/// Errors raised while starting a shell command
#[derive(Debug, Error)]
pub enum ShellError {
  #[error("Failed to spawn {shell} for command '{command}'")]
  Spawn {
    shell: String,
    command: String,
    #[source]
    source: std::io::Error,
  },
}

/// How a finished shell command ended.
///
/// Only ever logged; the report does not change based on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellOutcome {
  /// Exit code, or `None` when the child was terminated by a signal
  pub code: Option<i32>,
}

impl ShellOutcome {
  /// Outcome of a command that exited with `code`
  pub const fn exited(code: i32) -> Self {
    Self { code: Some(code) }
  }

  /// Whether the command exited with status code 0
  pub const fn success(&self) -> bool {
    matches!(self.code, Some(0))
  }
}

impl From<ExitStatus> for ShellOutcome {
  fn from(status: ExitStatus) -> Self {
    Self { code: status.code() }
  }
}

impl fmt::Display for ShellOutcome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.code {
      Some(code) => write!(f, "exit code {code}"),
      None => write!(f, "terminated by signal"),
    }
  }
}

/// Runs a command string and waits for it to finish
pub trait ShellExecutor {
  /// Execute `command`, blocking until the child exits.
  fn execute(&self, command: &str) -> Result<ShellOutcome, ShellError>;
}

/// Executes commands via `/bin/sh -c` with inherited stdin/stdout/stderr.
///
/// There is nothing to capture: the child writes straight to the streams the
/// runner writes to. No timeout is applied, so a hanging command blocks the
/// caller until it exits.
#[derive(Debug, Clone)]
pub struct SystemShell {
  shell: String,
}

impl Default for SystemShell {
  fn default() -> Self {
    Self::new(consts::SHELL_EXECUTABLE)
  }
}

impl SystemShell {
  /// Create an executor that runs commands through `shell`
  pub fn new(shell: impl Into<String>) -> Self {
    Self { shell: shell.into() }
  }

  /// Path of the shell commands are handed to
  pub fn shell(&self) -> &str {
    &self.shell
  }
}

impl ShellExecutor for SystemShell {
  fn execute(&self, command: &str) -> Result<ShellOutcome, ShellError> {
    let status = Command::new(&self.shell)
      .args([consts::SHELL_COMMAND_FLAG, command])
      .stdin(Stdio::inherit())
      .stdout(Stdio::inherit())
      .stderr(Stdio::inherit())
      .status()
      .map_err(|source| ShellError::Spawn {
        shell: self.shell.clone(),
        command: command.to_string(),
        source,
      })?;

    Ok(status.into())
  }
}

#[cfg(all(test, unix))]
mod tests {
  use super::*;

  #[test]
  fn reports_exit_code_of_command() {
    let shell = SystemShell::default();

    let outcome = shell.execute("exit 3").unwrap();

    assert_eq!(outcome, ShellOutcome::exited(3));
    assert!(!outcome.success());
  }

  #[test]
  fn successful_command_is_success() {
    let outcome = SystemShell::default().execute("true").unwrap();
    assert!(outcome.success());
    assert_eq!(outcome.to_string(), "exit code 0");
  }

  #[test]
  fn missing_command_is_not_an_error() {
    // The shell itself starts fine and reports 127 for an unknown command.
    let outcome = SystemShell::default()
      .execute("hello-embedded-no-such-tool-xyz 2>/dev/null")
      .unwrap();

    assert_eq!(outcome.code, Some(127));
  }

  #[test]
  fn missing_shell_is_a_spawn_error() {
    let shell = SystemShell::new("/nonexistent/hello-embedded-shell");

    let err = shell.execute("uname -a").unwrap_err();

    let ShellError::Spawn { shell, command, .. } = err;
    assert_eq!(shell, "/nonexistent/hello-embedded-shell");
    assert_eq!(command, "uname -a");
  }

  #[test]
  fn signal_termination_has_no_code() {
    let outcome = SystemShell::default().execute("kill -9 $$").unwrap();

    assert_eq!(outcome.code, None);
    assert_eq!(outcome.to_string(), "terminated by signal");
  }
}
