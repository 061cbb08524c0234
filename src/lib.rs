//! # hello-embedded
//!
//! Boot-time diagnostic for the meta-homeai Yocto layer on Raspberry Pi 5.
//! Prints a banner, then the output of `uname -a`, the `/proc/cpuinfo` model
//! line and `free -h`, and confirms the layer is working.

pub mod cli;
pub mod consts;
pub mod diagnostics;
pub mod output;
pub mod shell;
