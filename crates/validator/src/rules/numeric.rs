//! Numeric comparison rules
//!
//! The input is parsed as an exact decimal ([`rust_decimal::Decimal`])
//! before comparing, so integer and fractional thresholds compare without
//! floating-point rounding surprises. Input that does not parse as a
//! decimal number can never satisfy a numeric constraint and yields
//! `false`, not an error.
//!
//! Thresholds are accepted as `impl Into<Decimal>`, so integer literals
//! chain naturally (`.greater_than(10)`). Fractional thresholds are passed
//! as a `Decimal` built via `Decimal::from_str` or `Decimal::try_from`.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::foundation::ValidationError;

/// Parses the input as an exact decimal, tolerating surrounding whitespace.
fn parse_decimal(input: &str) -> Option<Decimal> {
    Decimal::from_str(input.trim()).ok()
}

// ============================================================================
// VALID NUMBER
// ============================================================================

crate::rule! {
    /// The input must parse as a decimal number.
    pub DecimalNumber;
    check(input) { parse_decimal(input).is_some() }
    describe() { ValidationError::new("valid_number", "Must be a valid number") }
    fn decimal_number();
}

// ============================================================================
// ORDERING COMPARISONS
// ============================================================================

crate::rule! {
    /// The input, parsed as a decimal, must be strictly greater than `target`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub GreaterThan { target: Decimal };
    check(self, input) { parse_decimal(input).is_some_and(|n| n > self.target) }
    describe(self) {
        ValidationError::new(
            "greater_than",
            format!("Must be greater than {}", self.target),
        )
        .with_param("target", self.target.to_string())
    }
    new(target: impl Into<Decimal>) { Self { target: target.into() } }
    fn greater_than(target: impl Into<Decimal>);
}

crate::rule! {
    /// The input, parsed as a decimal, must be greater than or equal to `target`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub GreaterThanOrEqual { target: Decimal };
    check(self, input) { parse_decimal(input).is_some_and(|n| n >= self.target) }
    describe(self) {
        ValidationError::new(
            "greater_than_or_equal",
            format!("Must be greater than or equal to {}", self.target),
        )
        .with_param("target", self.target.to_string())
    }
    new(target: impl Into<Decimal>) { Self { target: target.into() } }
    fn greater_than_or_equal(target: impl Into<Decimal>);
}

crate::rule! {
    /// The input, parsed as a decimal, must be strictly less than `target`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub LessThan { target: Decimal };
    check(self, input) { parse_decimal(input).is_some_and(|n| n < self.target) }
    describe(self) {
        ValidationError::new(
            "less_than",
            format!("Must be less than {}", self.target),
        )
        .with_param("target", self.target.to_string())
    }
    new(target: impl Into<Decimal>) { Self { target: target.into() } }
    fn less_than(target: impl Into<Decimal>);
}

crate::rule! {
    /// The input, parsed as a decimal, must be less than or equal to `target`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub LessThanOrEqual { target: Decimal };
    check(self, input) { parse_decimal(input).is_some_and(|n| n <= self.target) }
    describe(self) {
        ValidationError::new(
            "less_than_or_equal",
            format!("Must be less than or equal to {}", self.target),
        )
        .with_param("target", self.target.to_string())
    }
    new(target: impl Into<Decimal>) { Self { target: target.into() } }
    fn less_than_or_equal(target: impl Into<Decimal>);
}

crate::rule! {
    /// The input, parsed as a decimal, must equal `target` numerically.
    ///
    /// The comparison is numeric, not textual: `"1.50"` equals `1.5`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub EqualTo { target: Decimal };
    check(self, input) { parse_decimal(input).is_some_and(|n| n == self.target) }
    describe(self) {
        ValidationError::new(
            "number_equal_to",
            format!("Must be equal to {}", self.target),
        )
        .with_param("target", self.target.to_string())
    }
    new(target: impl Into<Decimal>) { Self { target: target.into() } }
    fn number_equal_to(target: impl Into<Decimal>);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Rule;
    use rstest::rstest;

    #[test]
    fn test_decimal_number() {
        let rule = decimal_number();
        assert!(rule.validate("15"));
        assert!(rule.validate("-3.25"));
        assert!(rule.validate(" 42 ")); // surrounding whitespace tolerated
        assert!(!rule.validate("abc"));
        assert!(!rule.validate(""));
    }

    #[rstest]
    #[case("15", true)]
    #[case("10", false)] // strict
    #[case("10.0001", true)]
    #[case("abc", false)] // non-numeric is a plain failure
    #[case("", false)]
    fn test_greater_than(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(greater_than(10).validate(input), expected);
    }

    #[rstest]
    #[case("10", true)] // inclusive
    #[case("9.999", false)]
    #[case("11", true)]
    fn test_greater_than_or_equal(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(greater_than_or_equal(10).validate(input), expected);
    }

    #[rstest]
    #[case("9", true)]
    #[case("10", false)] // strict
    #[case("-100", true)]
    fn test_less_than(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(less_than(10).validate(input), expected);
    }

    #[rstest]
    #[case("10", true)] // inclusive
    #[case("10.5", false)]
    fn test_less_than_or_equal(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(less_than_or_equal(10).validate(input), expected);
    }

    #[test]
    fn test_equal_to_is_numeric_not_textual() {
        let rule = EqualTo::new(Decimal::new(15, 1)); // 1.5
        assert!(rule.validate("1.5"));
        assert!(rule.validate("1.50")); // trailing zero, same number
        assert!(!rule.validate("1.51"));
    }

    #[test]
    fn test_exact_decimal_comparison() {
        // 0.1 + 0.2 style inputs compare exactly under Decimal
        let rule = EqualTo::new(Decimal::from_str("0.3").unwrap());
        assert!(rule.validate("0.3"));
        assert!(!rule.validate("0.30000000000000004"));
    }

    #[test]
    fn test_describe_carries_target() {
        let err = greater_than(10).describe();
        assert_eq!(err.code, "greater_than");
        assert_eq!(err.param("target"), Some("10"));
    }
}
