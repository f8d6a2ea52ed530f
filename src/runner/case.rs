//! A single dynamically generated test case

use std::fmt;

/// One test case: a name plus the expected value and the input it is
/// computed from. Immutable once built; names are not required to be unique.
///
/// `E` is the type of the expected value, `I` the type of the input handed
/// to the generator's execute routine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase<E, I> {
    /// Display name, derived from the template at construction time
    pub name: String,
    /// Expected value
    pub expected: E,
    /// Input value passed to the execute routine
    pub input: I,
}

impl<E: fmt::Display, I: fmt::Display> TestCase<E, I> {
    /// Build a case, deriving its name from `template`
    ///
    /// `{expected}` and `{input}` placeholders in the template are replaced
    /// with the formatted values. A template without placeholders becomes
    /// the name verbatim.
    pub fn new(template: &str, expected: E, input: I) -> Self {
        let name = template
            .replace("{expected}", &expected.to_string())
            .replace("{input}", &input.to_string());
        Self {
            name,
            expected,
            input,
        }
    }

    /// Build one case per input, all sharing the same expected value
    ///
    /// Convenience for suites where many inputs map to one result (e.g.
    /// every multiple of three maps to "Fizz").
    pub fn with_inputs(
        template: &str,
        expected: E,
        inputs: impl IntoIterator<Item = I>,
    ) -> Vec<Self>
    where
        E: Clone,
    {
        inputs
            .into_iter()
            .map(|input| Self::new(template, expected.clone(), input))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_fills_both_placeholders() {
        let case = TestCase::new("input [{input}] should map to [{expected}]", "Fizz", 3);
        assert_eq!(case.name, "input [3] should map to [Fizz]");
        assert_eq!(case.expected, "Fizz");
        assert_eq!(case.input, 3);
    }

    #[test]
    fn test_template_without_placeholders_is_used_verbatim() {
        let case = TestCase::new("plain name", 1, 2);
        assert_eq!(case.name, "plain name");
    }

    #[test]
    fn test_repeated_placeholder_is_replaced_everywhere() {
        let case = TestCase::new("{input}/{input} -> {expected}", "x", 7);
        assert_eq!(case.name, "7/7 -> x");
    }

    #[test]
    fn test_with_inputs_shares_the_expected_value() {
        let cases = TestCase::with_inputs("{input} -> {expected}", "Fizz".to_string(), [3, 6, 9]);
        assert_eq!(cases.len(), 3);
        assert_eq!(cases[0].name, "3 -> Fizz");
        assert_eq!(cases[2].name, "9 -> Fizz");
        assert!(cases.iter().all(|c| c.expected == "Fizz"));
    }

    #[test]
    fn test_with_inputs_empty_iterator_yields_no_cases() {
        let cases: Vec<TestCase<&str, i32>> = TestCase::with_inputs("{input}", "x", []);
        assert!(cases.is_empty());
    }
}
