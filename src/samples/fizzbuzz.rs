//! FizzBuzz suites built two ways: one case per value, and grouped by
//! expected value through `TestCase::with_inputs`.

use crate::common::Result;
use crate::runner::{TestCase, TestCaseGenerator};

const NAME_TEMPLATE: &str = "input [{input}] should map to [{expected}]";

/// Reference implementation the generated cases are checked against
pub fn fizzbuzz(i: u32) -> String {
    match (i % 3, i % 5) {
        (0, 0) => "FizzBuzz".to_string(),
        (0, _) => "Fizz".to_string(),
        (_, 0) => "Buzz".to_string(),
        _ => i.to_string(),
    }
}

/// Generates one case per integer in `1..=max`.
pub struct FizzBuzz {
    max: u32,
}

impl FizzBuzz {
    pub fn new(max: u32) -> Self {
        Self { max }
    }
}

impl TestCaseGenerator for FizzBuzz {
    type Expected = String;
    type Input = u32;

    fn suite_name(&self) -> &str {
        "fizzbuzz"
    }

    fn generate(&mut self) -> Result<Vec<TestCase<String, u32>>> {
        Ok((1..=self.max)
            .map(|i| TestCase::new(NAME_TEMPLATE, fizzbuzz(i), i))
            .collect())
    }

    fn execute(&mut self, case: &TestCase<String, u32>) -> Result<()> {
        let actual = fizzbuzz(case.input);
        assert_eq!(actual, case.expected, "{}", case.name);
        Ok(())
    }
}

/// Same coverage as [`FizzBuzz`], but inputs are first grouped by their
/// expected value and the Fizz/Buzz/FizzBuzz groups are expanded through
/// the `with_inputs` factory.
pub struct FizzBuzzGrouped {
    max: u32,
}

impl FizzBuzzGrouped {
    pub fn new(max: u32) -> Self {
        Self { max }
    }
}

impl TestCaseGenerator for FizzBuzzGrouped {
    type Expected = String;
    type Input = u32;

    fn suite_name(&self) -> &str {
        "fizzbuzz-grouped"
    }

    fn generate(&mut self) -> Result<Vec<TestCase<String, u32>>> {
        let mut cases = Vec::with_capacity(self.max as usize);
        let mut fizz = Vec::new();
        let mut buzz = Vec::new();
        let mut fizzbuzz_inputs = Vec::new();

        for i in 1..=self.max {
            match (i % 3, i % 5) {
                (0, 0) => fizzbuzz_inputs.push(i),
                (0, _) => fizz.push(i),
                (_, 0) => buzz.push(i),
                _ => cases.push(TestCase::new(NAME_TEMPLATE, i.to_string(), i)),
            }
        }

        cases.extend(TestCase::with_inputs(NAME_TEMPLATE, "Fizz".to_string(), fizz));
        cases.extend(TestCase::with_inputs(NAME_TEMPLATE, "Buzz".to_string(), buzz));
        cases.extend(TestCase::with_inputs(
            NAME_TEMPLATE,
            "FizzBuzz".to_string(),
            fizzbuzz_inputs,
        ));

        Ok(cases)
    }

    fn execute(&mut self, case: &TestCase<String, u32>) -> Result<()> {
        let actual = fizzbuzz(case.input);
        assert_eq!(actual, case.expected, "{}", case.name);
        Ok(())
    }
}
