//! Closure-backed rule
//!
//! The escape hatch behind [`Validator::add_rule`](crate::Validator::add_rule)
//! for one-off checks that do not warrant a named rule type.

use std::fmt;

use crate::foundation::{Rule, ValidationError};

/// A rule built from a predicate closure and a fixed failure description.
///
/// # Examples
///
/// ```rust,ignore
/// use stringcheck::rules::Custom;
/// use stringcheck::foundation::ValidationError;
///
/// let no_trailing_space = Custom::new(
///     |input| !input.ends_with(' '),
///     ValidationError::new("trailing_space", "Must not end with a space"),
/// );
/// ```
pub struct Custom {
    predicate: Box<dyn Fn(&str) -> bool>,
    error: ValidationError,
}

impl Custom {
    /// Creates a rule from a predicate and the error it reports on failure.
    #[must_use]
    pub fn new(predicate: impl Fn(&str) -> bool + 'static, error: ValidationError) -> Self {
        Self {
            predicate: Box::new(predicate),
            error,
        }
    }
}

impl Rule for Custom {
    fn validate(&self, input: &str) -> bool {
        (self.predicate)(input)
    }

    fn describe(&self) -> ValidationError {
        self.error.clone()
    }
}

impl fmt::Debug for Custom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

/// Creates a closure-backed rule.
#[must_use]
pub fn custom(predicate: impl Fn(&str) -> bool + 'static, error: ValidationError) -> Custom {
    Custom::new(predicate, error)
}

// ============================================================================
// TESTS
// ============================================================================
