//! The generator contract implemented by dynamic test suites

use super::case::TestCase;
use crate::common::Result;

/// A user-supplied object that produces and executes dynamic test cases.
///
/// Constructed once per run. `set_up` runs once before any case executes and
/// `tear_down` once after all cases executed, even when individual cases
/// fail. `tear_down` is not called when `set_up` itself fails.
///
/// `execute` may fail two ways: returning `Err` (an execution error) or
/// panicking (a failed assertion, e.g. `assert_eq!`). The runner isolates
/// both so that the remaining cases still run.
pub trait TestCaseGenerator {
    /// Type of the expected value carried by each case
    type Expected;
    /// Type of the input value carried by each case
    type Input;

    /// Name of the suite, used for reporting and the log directory
    fn suite_name(&self) -> &str;

    /// Produce the list of cases for this run
    fn generate(&mut self) -> Result<Vec<TestCase<Self::Expected, Self::Input>>>;

    /// Execute one generated case
    fn execute(&mut self, case: &TestCase<Self::Expected, Self::Input>) -> Result<()>;

    /// Called once before the first case executes
    fn set_up(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called once after the last case executed
    fn tear_down(&mut self) -> Result<()> {
        Ok(())
    }
}
