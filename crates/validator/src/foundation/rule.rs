//! The rule contract
//!
//! This module defines the single trait every check implements.

use crate::foundation::ValidationError;

// ============================================================================
// RULE TRAIT
// ============================================================================

/// A single stateless check over an input string.
///
/// Rules are immutable once constructed: any configuration (thresholds,
/// target strings, patterns) is captured at construction time. A
/// [`Validator`](crate::Validator) owns its rules exclusively and evaluates
/// them in insertion order.
///
/// # Contract
///
/// * [`validate`](Rule::validate) is a pure predicate. It must be safe to
///   call on any string, including the empty string, and it never fails:
///   input that cannot satisfy the check (e.g. non-numeric text given to a
///   numeric rule) simply yields `false`.
/// * [`describe`](Rule::describe) returns the parameterized failure message
///   for this rule, independent of whether it actually failed.
///
/// # Examples
///
/// ```rust,ignore
/// use stringcheck::foundation::{Rule, ValidationError};
///
/// struct MinLength {
///     min: usize,
/// }
///
/// impl Rule for MinLength {
///     fn validate(&self, input: &str) -> bool {
///         input.chars().count() >= self.min
///     }
///
///     fn describe(&self) -> ValidationError {
///         ValidationError::new(
///             "min_length",
///             format!("Must be at least {} characters", self.min),
///         )
///     }
/// }
/// ```
pub trait Rule {
    /// Checks the input against this rule.
    ///
    /// Returns `true` if the input satisfies the check. Never panics and
    /// never reports an error: unparseable or otherwise malformed input is
    /// a plain `false`.
    fn validate(&self, input: &str) -> bool;

    /// Returns the failure description for this rule.
    ///
    /// The message references the rule's configured parameters (threshold,
    /// target string, pattern) so a UI can show the user what was expected.
    fn describe(&self) -> ValidationError;
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn validate(&self, input: &str) -> bool {
        (**self).validate(input)
    }

    fn describe(&self) -> ValidationError {
        (**self).describe()
    }
}

impl<R: Rule + ?Sized> Rule for &R {
    fn validate(&self, input: &str) -> bool {
        (**self).validate(input)
    }

    fn describe(&self) -> ValidationError {
        (**self).describe()
    }
}

// ============================================================================
// TESTS
// ============================================================================
