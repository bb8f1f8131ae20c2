//! Length rules
//!
//! Length is measured in Unicode scalar values (chars), not bytes, so
//! accented and non-Latin form input is counted the way users see it.
//! Both bounds are inclusive.

use crate::foundation::ValidationError;

// ============================================================================
// NON EMPTY
// ============================================================================

crate::rule! {
    /// The input must not be the empty string.
    ///
    /// Whitespace-only input is not empty.
    pub NonEmpty;
    check(input) { !input.is_empty() }
    describe() { ValidationError::new("non_empty", "Must not be empty") }
    fn non_empty();
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::rule! {
    /// The input must have at least `min` characters (inclusive).
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize };
    check(self, input) { input.chars().count() >= self.min }
    describe(self) {
        ValidationError::new(
            "min_length",
            format!("Must be at least {} characters", self.min),
        )
        .with_param("min", self.min.to_string())
    }
    fn min_length(min: usize);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::rule! {
    /// The input must have at most `max` characters (inclusive).
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize };
    check(self, input) { input.chars().count() <= self.max }
    describe(self) {
        ValidationError::new(
            "max_length",
            format!("Must be at most {} characters", self.max),
        )
        .with_param("max", self.max.to_string())
    }
    fn max_length(max: usize);
}

// ============================================================================
// TESTS
// ============================================================================
