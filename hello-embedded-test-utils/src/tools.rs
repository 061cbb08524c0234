//! Stub host utilities for exercising the diagnostic binary
//!
//! [`FakeToolsGuard`] writes small `/bin/sh` scripts named after the host
//! utilities into a temporary directory. Pointing a child's `PATH` at
//! [`FakeToolsGuard::path`] gives the report deterministic content, and
//! leaving tools out simulates an image where they are missing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::TempDir;

/// Line printed by the fake `uname`
pub const FAKE_UNAME: &str = "Linux raspberrypi5 6.6.20-v8-16k #1 SMP PREEMPT Tue Mar 12 2024 aarch64 GNU/Linux";

/// Model line carried by the fake `/proc/cpuinfo`
pub const FAKE_CPUINFO_MODEL: &str = "Model\t\t: Raspberry Pi 5 Model B Rev 1.0";

/// Table printed by the fake `free`
pub const FAKE_MEMORY: &str = "               total        used        free      shared  buff/cache   available
Mem:           7.9Gi       412Mi       7.2Gi       5.0Mi       348Mi       7.5Gi
Swap:          99Mi          0B        99Mi";

/// A temporary directory of stub utilities, removed on drop
pub struct FakeToolsGuard {
  /// The temporary directory holding the scripts
  pub temp_dir: TempDir,
}

impl FakeToolsGuard {
  /// An empty tool directory: every utility is missing
  pub fn empty() -> Result<Self> {
    let temp_dir = TempDir::new().context("Failed to create fake tools directory")?;
    Ok(Self { temp_dir })
  }

  /// A tool directory with working `uname`, `cat`, `grep` and `free`
  pub fn new() -> Result<Self> {
    let guard = Self::empty()?;
    guard.install("uname", &format!("printf '%s\\n' '{FAKE_UNAME}'"))?;
    guard.install(
      "cat",
      &format!("printf 'processor\\t: 0\\nBogoMIPS\\t: 108.00\\nRevision\\t: d04170\\n{FAKE_CPUINFO_MODEL}\\n'"),
    )?;
    // Builtins only, so the stub works with nothing else on PATH
    guard.install(
      "grep",
      r#"status=1
while IFS= read -r line; do
  case "$line" in
    *"$1"*) printf '%s\n' "$line"; status=0 ;;
  esac
done
exit $status"#,
    )?;
    guard.install("free", &format!("printf '%s\\n' '{FAKE_MEMORY}'"))?;
    Ok(guard)
  }

  /// Directory to use as `PATH`
  pub fn path(&self) -> &Path {
    self.temp_dir.path()
  }

  /// Write an executable `/bin/sh` script called `name` with `body`
  pub fn install(&self, name: &str, body: &str) -> Result<()> {
    let script = self.temp_dir.path().join(name);
    fs::write(&script, format!("#!/bin/sh\n{body}\n"))
      .with_context(|| format!("Failed to write fake tool {}", script.display()))?;

    #[cfg(unix)]
    {
      use std::os::unix::fs::PermissionsExt;
      fs::set_permissions(&script, fs::Permissions::from_mode(0o755))
        .with_context(|| format!("Failed to make {} executable", script.display()))?;
    }

    Ok(())
  }

  /// Remove a previously installed tool
  pub fn remove(&self, name: &str) -> Result<()> {
    let script = self.temp_dir.path().join(name);
    fs::remove_file(&script).with_context(|| format!("Failed to remove fake tool {}", script.display()))
  }
}
