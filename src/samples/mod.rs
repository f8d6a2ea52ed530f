//! Sample suites exercising the dynamic runner

pub mod fizzbuzz;

pub use fizzbuzz::{FizzBuzz, FizzBuzzGrouped};

/// Names of the built-in suites, as accepted by `dyntest run`
pub const SUITES: &[&str] = &["fizzbuzz", "fizzbuzz-grouped"];
