//! # Command Line Interface
//!
//! The report takes no input. The parser exists only for ambient knobs
//! (verbosity, colors) and never rejects a command line: anything it cannot
//! parse, `--help` and `--version` included, falls back to the defaults.

use std::ffi::OsString;

use clap::{ArgAction, Parser};

use crate::output::ColorMode;

/// Top-level CLI for hello-embedded
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(name = "hello-embedded")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Boot-time diagnostic for the meta-homeai layer")]
#[command(
  long_about = "Prints the meta-homeai banner followed by kernel, CPU and memory information\n\
        gathered from uname, /proc/cpuinfo and free, confirming the image boots and\n\
        userspace tooling is reachable."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for logging on stderr.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,
}

impl Cli {
  /// Parse the process arguments, ignoring anything that does not parse
  pub fn parse_lenient() -> Self {
    Self::parse_lenient_from(std::env::args_os())
  }

  /// Parse `args`, falling back to defaults on any parse outcome other than
  /// success
  pub fn parse_lenient_from<I, T>(args: I) -> Self
  where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
  {
    Self::try_parse_from(args).unwrap_or_default()
  }

  /// Log level selected by the verbosity count
  pub const fn log_level(&self) -> tracing::Level {
    match self.verbose {
      0 => tracing::Level::WARN,  // Default: warnings and errors
      1 => tracing::Level::INFO,  // -v: info, warnings, and errors
      2 => tracing::Level::DEBUG, // -vv: debug, info, warnings, and errors
      _ => tracing::Level::TRACE, // -vvv or more: trace and everything else
    }
  }
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn verify_cli() {
    Cli::command().debug_assert();
  }

  #[test]
  fn no_arguments_gives_defaults() {
    assert_eq!(Cli::parse_lenient_from(["hello-embedded"]), Cli::default());
  }

  #[test]
  fn verbosity_is_counted() {
    let cli = Cli::parse_lenient_from(["hello-embedded", "-vv"]);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.log_level(), tracing::Level::DEBUG);
  }

  #[test]
  fn colors_can_be_forced_off() {
    let cli = Cli::parse_lenient_from(["hello-embedded", "--colors", "NEVER"]);
    assert_eq!(cli.colors, ColorMode::Never);
  }

  #[test]
  fn unknown_arguments_are_ignored() {
    let cli = Cli::parse_lenient_from(["hello-embedded", "--frobnicate", "now"]);
    assert_eq!(cli, Cli::default());
  }

  #[test]
  fn help_and_version_do_not_short_circuit() {
    assert_eq!(Cli::parse_lenient_from(["hello-embedded", "--help"]), Cli::default());
    assert_eq!(Cli::parse_lenient_from(["hello-embedded", "--version"]), Cli::default());
  }

  #[test]
  fn default_log_level_is_warn() {
    assert_eq!(Cli::default().log_level(), tracing::Level::WARN);
  }
}
