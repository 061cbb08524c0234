//! Test utilities shared across the hello-embedded workspace
//!
//! This crate provides common testing infrastructure including:
//! - Stub host utilities on an isolated `PATH` ([`FakeToolsGuard`])
//! - Ordered marker assertions over captured output ([`assert_in_order`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod markers;
pub mod tools;

// Re-export commonly used items
pub use markers::{REPORT_MARKERS, assert_in_order, marker_positions};
pub use tools::{FAKE_CPUINFO_MODEL, FAKE_MEMORY, FAKE_UNAME, FakeToolsGuard};
