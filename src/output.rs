//! # Output Formatting
//!
//! Writes the fixed parts of the report: banner, section headers and the
//! closing line. Styling only applies when stdout supports color, so piped
//! output stays plain text.

use std::io::{self, Write};

use owo_colors::{OwoColorize, Stream, Style};

use crate::consts;

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Yes,
  /// Enable colored output (alias for Yes)
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  #[default]
  Auto,
  /// Disable colored output
  No,
  /// Disable colored output (alias for No)
  Never,
}

impl ColorMode {
  /// Set the global color override for this mode
  pub fn apply(self) {
    match self {
      ColorMode::Always | ColorMode::Yes => owo_colors::set_override(true),
      ColorMode::Never | ColorMode::No => owo_colors::set_override(false),
      ColorMode::Auto => {
        // Leave owo_colors to detect the terminal and NO_COLOR itself
      }
    }
  }
}

/// Write the banner block identifying the layer and board
pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
  let frame = Style::new().cyan();
  let body = Style::new().bold();

  writeln!(
    out,
    "{}",
    consts::BANNER_SEPARATOR.if_supports_color(Stream::Stdout, |s| s.style(frame))
  )?;
  for line in consts::BANNER_LINES {
    writeln!(out, "{}", line.if_supports_color(Stream::Stdout, |l| l.style(body)))?;
  }
  writeln!(
    out,
    "{}",
    consts::BANNER_SEPARATOR.if_supports_color(Stream::Stdout, |s| s.style(frame))
  )
}

/// Write a section header, preceded by an empty line
pub fn write_header<W: Write>(out: &mut W, header: &str) -> io::Result<()> {
  let style = Style::new().blue().bold();
  writeln!(out, "\n{}", header.if_supports_color(Stream::Stdout, |h| h.style(style)))
}

/// Write the closing confirmation, preceded by an empty line
pub fn write_closing<W: Write>(out: &mut W) -> io::Result<()> {
  let style = Style::new().green().bold();
  writeln!(
    out,
    "\n{}",
    consts::CLOSING_LINE.if_supports_color(Stream::Stdout, |c| c.style(style))
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
    owo_colors::set_override(false);
    let mut buf = Vec::new();
    f(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
  }

  #[test]
  fn banner_is_framed_by_fixed_separators() {
    let banner = render(|out| write_banner(out));

    let lines: Vec<&str> = banner.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "=".repeat(40));
    assert_eq!(lines[4], "=".repeat(40));
    assert_eq!(lines[1], "  Hello from meta-homeai layer!");
    assert_eq!(lines[2], "  Raspberry Pi 5 - Custom Yocto Linux");
    assert_eq!(lines[3], "  Carlos Vargas - Embedded AI Project");
  }

  #[test]
  fn header_is_preceded_by_blank_line() {
    assert_eq!(render(|out| write_header(out, "Memory:")), "\nMemory:\n");
  }

  #[test]
  fn closing_line_is_plain_when_colors_disabled() {
    assert_eq!(render(|out| write_closing(out)), "\nLayer is working correctly!\n");
  }

  #[test]
  fn auto_is_the_default_color_mode() {
    assert_eq!(ColorMode::default(), ColorMode::Auto);
  }
}
