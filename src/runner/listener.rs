//! The notification sink for test run events

use colored::Colorize;
use serde::Serialize;
use std::fmt;

/// How a single case failed
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CaseFailure {
    /// A failed assertion (the execute routine panicked)
    Assertion(String),
    /// An execution error (the execute routine returned `Err`)
    Error(String),
}

impl fmt::Display for CaseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assertion(msg) => write!(f, "assertion failed: {msg}"),
            Self::Error(msg) => write!(f, "error: {msg}"),
        }
    }
}

/// Receives start/success/failure/finish notifications for every generated
/// case, plus bracketing events for the suite itself.
///
/// All methods default to no-ops so implementations only override the
/// events they care about.
pub trait RunListener {
    /// The suite is about to run `total` cases
    fn suite_started(&mut self, suite: &str, total: usize) {
        let _ = (suite, total);
    }

    /// A case is about to execute
    fn case_started(&mut self, name: &str) {
        let _ = name;
    }

    /// A case executed without failure
    fn case_succeeded(&mut self, name: &str) {
        let _ = name;
    }

    /// A case failed; later cases still run
    fn case_failed(&mut self, name: &str, failure: &CaseFailure) {
        let _ = (name, failure);
    }

    /// A case finished, regardless of outcome
    fn case_finished(&mut self, name: &str) {
        let _ = name;
    }

    /// The suite finished running all cases
    fn suite_finished(&mut self, suite: &str) {
        let _ = suite;
    }
}

/// Prints per-case progress to stdout with colored check marks.
pub struct ConsoleListener {
    verbose: bool,
}

impl ConsoleListener {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl RunListener for ConsoleListener {
    fn suite_started(&mut self, suite: &str, total: usize) {
        println!(
            "\n{} {} ({} cases)",
            "Running Suite:".blue().bold(),
            suite.white().bold(),
            total
        );
    }

    fn case_started(&mut self, name: &str) {
        if self.verbose {
            println!("  {} {}", "›".cyan(), name.dimmed());
        }
    }

    fn case_succeeded(&mut self, name: &str) {
        if self.verbose {
            println!("  {} {}", "✓".green(), name.dimmed());
        }
    }

    fn case_failed(&mut self, name: &str, failure: &CaseFailure) {
        println!("  {} {}: {}", "✗".red(), name, failure);
    }

    fn suite_finished(&mut self, suite: &str) {
        if self.verbose {
            println!("\n{} {}", "Finished:".blue(), suite.dimmed());
        }
    }
}

/// Mirrors every run event into `tracing`, so suite runs leave a
/// timestamped trail in the per-suite log file.
pub struct TraceListener;

impl RunListener for TraceListener {
    fn suite_started(&mut self, suite: &str, total: usize) {
        tracing::info!(target: "suite", suite, total, "Starting");
    }

    fn case_started(&mut self, name: &str) {
        tracing::info!(target: "suite", case = name, "Starting");
    }

    fn case_succeeded(&mut self, name: &str) {
        tracing::info!(target: "suite", case = name, "Succeeded");
    }

    fn case_failed(&mut self, name: &str, failure: &CaseFailure) {
        tracing::error!(target: "suite", case = name, %failure, "Failed");
    }

    fn case_finished(&mut self, name: &str) {
        tracing::debug!(target: "suite", case = name, "Finished");
    }

    fn suite_finished(&mut self, suite: &str) {
        tracing::info!(target: "suite", suite, "Finished");
    }
}
