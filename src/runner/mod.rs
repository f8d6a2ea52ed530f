//! Dynamic test-case generation and execution
//!
//! A `TestCaseGenerator` produces a list of named test cases at runtime and
//! the `Runner` executes them one by one, reporting each to the registered
//! `RunListener`s as if it were a statically declared test.

pub mod case;
mod exec;
pub mod generator;
pub mod listener;

pub use case::TestCase;
pub use exec::{CaseReport, RunSummary, Runner};
pub use generator::TestCaseGenerator;
pub use listener::{CaseFailure, ConsoleListener, RunListener, TraceListener};
