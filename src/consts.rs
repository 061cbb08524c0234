//! Constants for hello-embedded
//!
//! Fixed report text and the shell commands the diagnostic runs. Everything
//! the report prints apart from child output lives here.

/// Shell used to run each diagnostic command, matching C `system()`
pub const SHELL_EXECUTABLE: &str = "/bin/sh";

/// Flag passing the command string to the shell
pub const SHELL_COMMAND_FLAG: &str = "-c";

/// Fixed-width separator framing the banner
pub const BANNER_SEPARATOR: &str = "========================================";

/// Banner body lines, printed between two separators
pub const BANNER_LINES: [&str; 3] = [
  "  Hello from meta-homeai layer!",
  "  Raspberry Pi 5 - Custom Yocto Linux",
  "  Carlos Vargas - Embedded AI Project",
];

/// Header for the kernel identification section
pub const KERNEL_HEADER: &str = "Kernel version:";
/// Kernel, hostname, release, version and machine
pub const KERNEL_COMMAND: &str = "uname -a";

/// Header for the processor model section
pub const CPU_HEADER: &str = "CPU Info:";
/// Board/processor model as reported by the kernel
pub const CPU_COMMAND: &str = "cat /proc/cpuinfo | grep 'Model'";

/// Header for the memory usage section
pub const MEMORY_HEADER: &str = "Memory:";
/// Memory usage in human-readable units
pub const MEMORY_COMMAND: &str = "free -h";

/// Final line confirming the layer booted
pub const CLOSING_LINE: &str = "Layer is working correctly!";
