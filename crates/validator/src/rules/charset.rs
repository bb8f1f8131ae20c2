//! Character-class rules
//!
//! Case composition (all/any upper or lower), digit composition
//! (none/any/only/starts-with), and special-character checks. Case rules
//! use Unicode casing and exempt uncased characters (digits, punctuation);
//! digit rules mean ASCII `0-9`; a "special" character is anything that is
//! not alphanumeric.

use crate::foundation::ValidationError;

// ============================================================================
// CASE COMPOSITION
// ============================================================================

crate::rule! {
    /// No character in the input may be uppercase.
    ///
    /// Uncased characters (digits, punctuation, whitespace) are ignored.
    pub AllLowercase;
    check(input) { input.chars().all(|c| !c.is_alphabetic() || c.is_lowercase()) }
    describe() { ValidationError::new("all_lowercase", "Must be entirely lowercase") }
    fn all_lowercase();
}

crate::rule! {
    /// No character in the input may be lowercase.
    ///
    /// Uncased characters (digits, punctuation, whitespace) are ignored.
    pub AllUppercase;
    check(input) { input.chars().all(|c| !c.is_alphabetic() || c.is_uppercase()) }
    describe() { ValidationError::new("all_uppercase", "Must be entirely uppercase") }
    fn all_uppercase();
}

crate::rule! {
    /// At least one character must be lowercase.
    pub AnyLowercase;
    check(input) { input.chars().any(char::is_lowercase) }
    describe() {
        ValidationError::new(
            "at_least_one_lowercase",
            "Must contain at least one lowercase letter",
        )
    }
    fn any_lowercase();
}

crate::rule! {
    /// At least one character must be uppercase.
    pub AnyUppercase;
    check(input) { input.chars().any(char::is_uppercase) }
    describe() {
        ValidationError::new(
            "at_least_one_uppercase",
            "Must contain at least one uppercase letter",
        )
    }
    fn any_uppercase();
}

// ============================================================================
// DIGIT COMPOSITION
// ============================================================================

crate::rule! {
    /// At least one character must be a digit.
    pub AnyDigit;
    check(input) { input.chars().any(|c| c.is_ascii_digit()) }
    describe() {
        ValidationError::new("at_least_one_digit", "Must contain at least one digit")
    }
    fn any_digit();
}

crate::rule! {
    /// No character may be a digit.
    pub NoDigits;
    check(input) { !input.chars().any(|c| c.is_ascii_digit()) }
    describe() { ValidationError::new("no_digits", "Must not contain digits") }
    fn no_digits();
}

crate::rule! {
    /// Every character must be a digit, and the input must not be empty.
    pub OnlyDigits;
    check(input) { !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()) }
    describe() { ValidationError::new("only_digits", "Must contain only digits") }
    fn only_digits();
}

crate::rule! {
    /// The first character must be a digit.
    ///
    /// Empty input fails.
    pub StartsWithDigit;
    check(input) { input.chars().next().is_some_and(|c| c.is_ascii_digit()) }
    describe() { ValidationError::new("starts_with_digit", "Must start with a digit") }
    fn starts_with_digit();
}

crate::rule! {
    /// The first character must not be a digit.
    ///
    /// Empty input fails: there is no first character to satisfy the check.
    pub StartsWithNonDigit;
    check(input) { input.chars().next().is_some_and(|c| !c.is_ascii_digit()) }
    describe() {
        ValidationError::new("starts_with_non_digit", "Must not start with a digit")
    }
    fn starts_with_non_digit();
}

// ============================================================================
// SPECIAL CHARACTERS
// ============================================================================

crate::rule! {
    /// Every character must be alphanumeric, and the input must not be empty.
    pub NoSpecialCharacters;
    check(input) { !input.is_empty() && input.chars().all(char::is_alphanumeric) }
    describe() {
        ValidationError::new(
            "no_special_characters",
            "Must not contain special characters",
        )
    }
    fn no_special_characters();
}

crate::rule! {
    /// At least one character must be non-alphanumeric.
    pub AnySpecialCharacter;
    check(input) { input.chars().any(|c| !c.is_alphanumeric()) }
    describe() {
        ValidationError::new(
            "at_least_one_special_character",
            "Must contain at least one special character",
        )
    }
    fn any_special_character();
}

// ============================================================================
// TESTS
// ============================================================================
