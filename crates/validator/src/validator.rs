//! The fluent validation engine
//!
//! A [`Validator`] binds one input string to an ordered list of rules and
//! evaluates them with short-circuit semantics: rules run in insertion
//! order and evaluation stops at the first failure, so only the first
//! error is ever reported. This matches the common form-UI pattern of
//! showing a single error at a time.
//!
//! # Examples
//!
//! ```rust,ignore
//! use stringcheck::Validator;
//!
//! let ok = Validator::new("test@example.com")
//!     .non_empty()
//!     .valid_email()
//!     .check();
//! assert!(ok);
//! ```

use std::fmt;

use rust_decimal::Decimal;

use crate::foundation::{BoxedRule, Rule, ValidationError};
use crate::rules::{
    AllLowercase, AllUppercase, AnyDigit, AnyLowercase, AnySpecialCharacter, AnyUppercase,
    Contains, CreditCardDashes, CreditCardDigits, CreditCardSpaces, Custom, DecimalNumber, Email,
    EndsWith, EqualTo, EqualsText, GreaterThan, GreaterThanOrEqual, LessThan, LessThanOrEqual,
    MatchesPattern, MaxLength, MinLength, NoDigits, NoSpecialCharacters, NonEmpty, NotContains,
    NotEqualsText, OnlyDigits, StartsWith, StartsWithDigit, StartsWithNonDigit, Url,
};

// ============================================================================
// VALIDATOR
// ============================================================================

/// The fluent string-validation builder.
///
/// One `Validator` validates one input string. Configuration methods each
/// append one rule (the credit-card methods append three) and return the
/// builder by value, so checks chain without intermediate variables. The
/// terminal [`check`](Validator::check) call evaluates the rules in
/// insertion order, short-circuiting at the first failure, and invokes the
/// registered success or error callback.
///
/// An empty rule list is valid: `check()` on a freshly built `Validator`
/// returns `true`.
pub struct Validator {
    input: String,
    rules: Vec<BoxedRule>,
    valid: bool,
    error: Option<ValidationError>,
    on_success: Option<Box<dyn FnMut()>>,
    on_error: Option<Box<dyn FnMut(&str)>>,
}

impl Validator {
    /// Creates a validator over the given input string.
    ///
    /// The input is immutable for the life of the builder.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            rules: Vec::new(),
            valid: true,
            error: None,
            on_success: None,
            on_error: None,
        }
    }

    /// The input string this validator checks.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Number of rules appended so far.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Result of the most recent [`check`](Validator::check).
    ///
    /// `true` before the first check.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The first failing rule's structured error from the most recent
    /// [`check`](Validator::check), if any.
    #[must_use]
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// The first failing rule's message from the most recent
    /// [`check`](Validator::check), if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_ref())
    }

    // ------------------------------------------------------------------------
    // Engine
    // ------------------------------------------------------------------------

    /// Appends an arbitrary rule.
    ///
    /// The escape hatch for custom checks; all fluent methods below go
    /// through here.
    pub fn add_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Registers the success callback, replacing any earlier registration.
    ///
    /// Invoked by [`check`](Validator::check) when every rule passes.
    pub fn on_success(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    /// Registers the error callback, replacing any earlier registration.
    ///
    /// Invoked by [`check`](Validator::check) with the first failing
    /// rule's message.
    pub fn on_error(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_error = Some(Box::new(callback));
        self
    }

    /// Runs every rule in insertion order and reports the outcome.
    ///
    /// Evaluation short-circuits: the first rule to fail determines the
    /// error message and the remaining rules are never evaluated. After
    /// the run, the success callback fires if everything passed, otherwise
    /// the error callback fires with the failing rule's message.
    ///
    /// `check` may be called again, including after appending more rules.
    /// The validity flag and error slot are reset at the start of every
    /// call, so each run reflects only the current rule list; a failed
    /// earlier run does not latch the builder invalid.
    ///
    /// Returns `true` if all rules passed (or the rule list is empty).
    pub fn check(&mut self) -> bool {
        self.valid = true;
        self.error = None;

        for rule in &self.rules {
            if !rule.validate(&self.input) {
                self.error = Some(rule.describe());
                self.valid = false;
                break;
            }
        }

        if self.valid {
            if let Some(callback) = self.on_success.as_mut() {
                callback();
            }
        } else if let Some(callback) = self.on_error.as_mut() {
            let message = self.error.as_ref().map_or("", |e| e.message.as_ref());
            callback(message);
        }

        self.valid
    }

    // ------------------------------------------------------------------------
    // Length
    // ------------------------------------------------------------------------

    /// The input must not be empty.
    pub fn non_empty(self) -> Self {
        self.add_rule(NonEmpty)
    }

    /// The input must have at least `min` characters (inclusive).
    pub fn min_length(self, min: usize) -> Self {
        self.add_rule(MinLength::new(min))
    }

    /// The input must have at most `max` characters (inclusive).
    pub fn max_length(self, max: usize) -> Self {
        self.add_rule(MaxLength::new(max))
    }

    // ------------------------------------------------------------------------
    // Numeric
    // ------------------------------------------------------------------------

    /// The input must parse as a decimal number.
    pub fn valid_number(self) -> Self {
        self.add_rule(DecimalNumber)
    }

    /// The input must be a number strictly greater than `target`.
    pub fn greater_than(self, target: impl Into<Decimal>) -> Self {
        self.add_rule(GreaterThan::new(target))
    }

    /// The input must be a number greater than or equal to `target`.
    pub fn greater_than_or_equal(self, target: impl Into<Decimal>) -> Self {
        self.add_rule(GreaterThanOrEqual::new(target))
    }

    /// The input must be a number strictly less than `target`.
    pub fn less_than(self, target: impl Into<Decimal>) -> Self {
        self.add_rule(LessThan::new(target))
    }

    /// The input must be a number less than or equal to `target`.
    pub fn less_than_or_equal(self, target: impl Into<Decimal>) -> Self {
        self.add_rule(LessThanOrEqual::new(target))
    }

    /// The input must be a number equal to `target`.
    pub fn number_equal_to(self, target: impl Into<Decimal>) -> Self {
        self.add_rule(EqualTo::new(target))
    }

    // ------------------------------------------------------------------------
    // Character classes
    // ------------------------------------------------------------------------

    /// No character may be uppercase.
    pub fn all_lowercase(self) -> Self {
        self.add_rule(AllLowercase)
    }

    /// No character may be lowercase.
    pub fn all_uppercase(self) -> Self {
        self.add_rule(AllUppercase)
    }

    /// At least one character must be uppercase.
    pub fn at_least_one_uppercase(self) -> Self {
        self.add_rule(AnyUppercase)
    }

    /// At least one character must be lowercase.
    pub fn at_least_one_lowercase(self) -> Self {
        self.add_rule(AnyLowercase)
    }

    /// At least one character must be a digit.
    pub fn at_least_one_digit(self) -> Self {
        self.add_rule(AnyDigit)
    }

    /// No character may be a digit.
    pub fn no_digits(self) -> Self {
        self.add_rule(NoDigits)
    }

    /// Every character must be a digit.
    pub fn only_digits(self) -> Self {
        self.add_rule(OnlyDigits)
    }

    /// The first character must be a digit.
    pub fn starts_with_digit(self) -> Self {
        self.add_rule(StartsWithDigit)
    }

    /// The first character must not be a digit.
    pub fn starts_with_non_digit(self) -> Self {
        self.add_rule(StartsWithNonDigit)
    }

    /// Every character must be alphanumeric.
    pub fn no_special_characters(self) -> Self {
        self.add_rule(NoSpecialCharacters)
    }

    /// At least one character must be non-alphanumeric.
    pub fn at_least_one_special_character(self) -> Self {
        self.add_rule(AnySpecialCharacter)
    }

    // ------------------------------------------------------------------------
    // Relations
    // ------------------------------------------------------------------------

    /// The input must equal `target` exactly (case-sensitive).
    pub fn text_equal_to(self, target: impl Into<String>) -> Self {
        self.add_rule(EqualsText::new(target))
    }

    /// The input must differ from `target`.
    pub fn text_not_equal_to(self, target: impl Into<String>) -> Self {
        self.add_rule(NotEqualsText::new(target))
    }

    /// The input must start with `prefix`.
    pub fn starts_with(self, prefix: impl Into<String>) -> Self {
        self.add_rule(StartsWith::new(prefix))
    }

    /// The input must end with `suffix`.
    pub fn ends_with(self, suffix: impl Into<String>) -> Self {
        self.add_rule(EndsWith::new(suffix))
    }

    /// The input must contain `target` as a substring.
    pub fn contains(self, target: impl Into<String>) -> Self {
        self.add_rule(Contains::new(target))
    }

    /// The input must not contain `target`.
    pub fn not_contains(self, target: impl Into<String>) -> Self {
        self.add_rule(NotContains::new(target))
    }

    // ------------------------------------------------------------------------
    // Formats
    // ------------------------------------------------------------------------

    /// The input must look like an email address.
    pub fn valid_email(self) -> Self {
        self.add_rule(Email)
    }

    /// The input must be an `http://` or `https://` URL.
    pub fn valid_url(self) -> Self {
        self.add_rule(Url)
    }

    /// The input must match the given regular expression.
    ///
    /// An invalid pattern cannot break the chain, so it appends a rule
    /// that always fails with an `invalid_pattern` message instead. Use
    /// [`MatchesPattern::new`] directly to surface the compile error.
    pub fn matches_pattern(self, pattern: &str) -> Self {
        match MatchesPattern::new(pattern) {
            Ok(rule) => self.add_rule(rule),
            Err(_) => {
                let error = ValidationError::new(
                    "invalid_pattern",
                    format!("Pattern '{pattern}' is not a valid regular expression"),
                )
                .with_param("pattern", pattern.to_string());
                self.add_rule(Custom::new(|_| false, error))
            }
        }
    }

    // ------------------------------------------------------------------------
    // Credit cards
    // ------------------------------------------------------------------------

    /// The input must be a 16-digit credit card number.
    ///
    /// Appends three rules: exact length 16 (min + max) and digits-only.
    pub fn credit_card_number(self) -> Self {
        self.add_rule(MinLength::new(16))
            .add_rule(MaxLength::new(16))
            .add_rule(CreditCardDigits)
    }

    /// The input must be a credit card number in `dddd dddd dddd dddd` form.
    ///
    /// Appends three rules: exact length 19 (min + max) and the spaced
    /// shape check.
    pub fn credit_card_number_with_spaces(self) -> Self {
        self.add_rule(MinLength::new(19))
            .add_rule(MaxLength::new(19))
            .add_rule(CreditCardSpaces)
    }

    /// The input must be a credit card number in `dddd-dddd-dddd-dddd` form.
    ///
    /// Appends three rules: exact length 19 (min + max) and the dashed
    /// shape check.
    pub fn credit_card_number_with_dashes(self) -> Self {
        self.add_rule(MinLength::new(19))
            .add_rule(MaxLength::new(19))
            .add_rule(CreditCardDashes)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("input", &self.input)
            .field("rules", &self.rules.len())
            .field("valid", &self.valid)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// STRING EXTENSION
// ============================================================================

/// Extension trait: start a validation chain directly from a string.
///
/// # Examples
///
/// ```rust,ignore
/// use stringcheck::Validatable;
///
/// assert!("hello".validator().non_empty().min_length(3).check());
/// ```
pub trait Validatable {
    /// Creates a [`Validator`] over this string.
    fn validator(&self) -> Validator;
}

impl Validatable for str {
    fn validator(&self) -> Validator {
        Validator::new(self)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rule_list_is_valid() {
        let mut v = Validator::new("anything");
        assert!(v.check());
        assert!(v.is_valid());
        assert!(v.error().is_none());
    }

    #[test]
    fn test_chaining() {
        let ok = Validator::new("test@example.com")
            .non_empty()
            .valid_email()
            .check();
        assert!(ok);
    }

    #[test]
    fn test_first_failure_wins() {
        let mut v = Validator::new("")
            .non_empty() // fails first
            .min_length(5); // would also fail, never reported
        assert!(!v.check());
        assert_eq!(v.error().map(|e| e.code.as_ref()), Some("non_empty"));
    }

    #[test]
    fn test_error_message_accessor() {
        let mut v = Validator::new("abcd").min_length(5);
        assert!(!v.check());
        assert_eq!(v.error_message(), Some("Must be at least 5 characters"));
    }

    #[test]
    fn test_recheck_resets_state() {
        use std::cell::Cell;
        use std::rc::Rc;

        // A rule that fails on its first evaluation and passes afterwards.
        let calls = Rc::new(Cell::new(0_u32));
        let seen = Rc::clone(&calls);
        let mut v = Validator::new("x").add_rule(Custom::new(
            move |_| {
                seen.set(seen.get() + 1);
                seen.get() > 1
            },
            ValidationError::new("flaky", "fails on the first run"),
        ));

        assert!(!v.check());
        // Each check starts fresh; the earlier failure does not latch.
        assert!(v.check());
        assert!(v.error().is_none());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_rules_accumulate_across_checks() {
        let mut v = Validator::new("hello").min_length(3);
        assert!(v.check());

        v = v.max_length(4);
        assert!(!v.check());
        assert_eq!(v.error().map(|e| e.code.as_ref()), Some("max_length"));
        assert_eq!(v.rule_count(), 2);
    }

    #[test]
    fn test_matches_pattern_invalid_pattern_fails_check() {
        let mut v = Validator::new("anything").matches_pattern("(unclosed");
        assert!(!v.check());
        assert_eq!(v.error().map(|e| e.code.as_ref()), Some("invalid_pattern"));
    }

    #[test]
    fn test_credit_card_appends_three_rules() {
        let v = Validator::new("4111111111111111").credit_card_number();
        assert_eq!(v.rule_count(), 3);
    }

    #[test]
    fn test_validatable_extension() {
        assert!("hello".validator().non_empty().min_length(3).check());
        assert!(!"".validator().non_empty().check());
    }

    #[test]
    fn test_debug_does_not_require_rule_debug() {
        let v = Validator::new("x").non_empty();
        let rendered = format!("{v:?}");
        assert!(rendered.contains("Validator"));
    }
}
