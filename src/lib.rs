//! dyntest - runtime-generated test cases with WebDriver helpers
//!
//! The core is a small dynamic test engine: a [`TestCaseGenerator`]
//! produces named test cases at runtime and the [`Runner`] executes them
//! one by one, reporting each case to [`runner::RunListener`]s with
//! per-case failure isolation. Around it sit thin browser-automation
//! helpers and sample FizzBuzz suites.

pub mod browser;
pub mod cli;
pub mod commands;
pub mod common;
pub mod runner;
pub mod samples;

// Re-export commonly used types
pub use common::{Error, Result};
pub use runner::{RunSummary, Runner, TestCase, TestCaseGenerator};
