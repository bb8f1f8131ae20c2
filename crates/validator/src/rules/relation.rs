//! String-relation rules
//!
//! Exact and substring comparisons against a target string. All
//! comparisons are case-sensitive.

use crate::foundation::ValidationError;

crate::rule! {
    /// The input must equal `target` exactly.
    #[derive(PartialEq, Eq, Hash)]
    pub EqualsText { target: String };
    check(self, input) { input == self.target }
    describe(self) {
        ValidationError::new(
            "text_equal_to",
            format!("Must be equal to '{}'", self.target),
        )
        .with_param("target", self.target.clone())
    }
    new(target: impl Into<String>) { Self { target: target.into() } }
    fn equals_text(target: impl Into<String>);
}

crate::rule! {
    /// The input must differ from `target`.
    #[derive(PartialEq, Eq, Hash)]
    pub NotEqualsText { target: String };
    check(self, input) { input != self.target }
    describe(self) {
        ValidationError::new(
            "text_not_equal_to",
            format!("Must not be equal to '{}'", self.target),
        )
        .with_param("target", self.target.clone())
    }
    new(target: impl Into<String>) { Self { target: target.into() } }
    fn not_equals_text(target: impl Into<String>);
}

crate::rule! {
    /// The input must start with `prefix`.
    #[derive(PartialEq, Eq, Hash)]
    pub StartsWith { prefix: String };
    check(self, input) { input.starts_with(&self.prefix) }
    describe(self) {
        ValidationError::new(
            "starts_with",
            format!("Must start with '{}'", self.prefix),
        )
        .with_param("prefix", self.prefix.clone())
    }
    new(prefix: impl Into<String>) { Self { prefix: prefix.into() } }
    fn text_starts_with(prefix: impl Into<String>);
}

crate::rule! {
    /// The input must end with `suffix`.
    #[derive(PartialEq, Eq, Hash)]
    pub EndsWith { suffix: String };
    check(self, input) { input.ends_with(&self.suffix) }
    describe(self) {
        ValidationError::new(
            "ends_with",
            format!("Must end with '{}'", self.suffix),
        )
        .with_param("suffix", self.suffix.clone())
    }
    new(suffix: impl Into<String>) { Self { suffix: suffix.into() } }
    fn text_ends_with(suffix: impl Into<String>);
}

crate::rule! {
    /// The input must contain `target` as a substring.
    #[derive(PartialEq, Eq, Hash)]
    pub Contains { target: String };
    check(self, input) { input.contains(&self.target) }
    describe(self) {
        ValidationError::new(
            "contains",
            format!("Must contain '{}'", self.target),
        )
        .with_param("target", self.target.clone())
    }
    new(target: impl Into<String>) { Self { target: target.into() } }
    fn text_contains(target: impl Into<String>);
}

crate::rule! {
    /// The input must not contain `target` as a substring.
    #[derive(PartialEq, Eq, Hash)]
    pub NotContains { target: String };
    check(self, input) { !input.contains(&self.target) }
    describe(self) {
        ValidationError::new(
            "not_contains",
            format!("Must not contain '{}'", self.target),
        )
        .with_param("target", self.target.clone())
    }
    new(target: impl Into<String>) { Self { target: target.into() } }
    fn text_not_contains(target: impl Into<String>);
}

// ============================================================================
// TESTS
// ============================================================================
