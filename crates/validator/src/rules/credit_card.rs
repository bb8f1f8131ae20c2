//! Credit-card shape rules
//!
//! Shape-only checks: digit runs with separators at fixed positions. The
//! fluent card methods on [`Validator`](crate::Validator) conjoin these
//! with exact-length rules (16 for plain, 19 for separated forms), so a
//! card check fails on any deviation in length or separator position.
//!
//! No checksum (Luhn) is applied; these rules validate what a user typed
//! into a form field, not whether the number is issuable.

use crate::foundation::ValidationError;

/// `dddd<sep>dddd<sep>dddd<sep>dddd` — separators at indices 4, 9, 14.
fn grouped_digits(input: &str, sep: char) -> bool {
    input.chars().count() == 19
        && input
            .chars()
            .enumerate()
            .all(|(i, c)| match i {
                4 | 9 | 14 => c == sep,
                _ => c.is_ascii_digit(),
            })
}

crate::rule! {
    /// Every character must be an ASCII digit (and the input non-empty).
    pub CreditCardDigits;
    check(input) { !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()) }
    describe() {
        ValidationError::new("credit_card", "Must be a valid credit card number")
    }
    fn credit_card_digits();
}

crate::rule! {
    /// Four groups of four digits separated by single spaces.
    pub CreditCardSpaces;
    check(input) { grouped_digits(input, ' ') }
    describe() {
        ValidationError::new(
            "credit_card_with_spaces",
            "Must be a valid credit card number with spaces",
        )
    }
    fn credit_card_spaces();
}

crate::rule! {
    /// Four groups of four digits separated by single dashes.
    pub CreditCardDashes;
    check(input) { grouped_digits(input, '-') }
    describe() {
        ValidationError::new(
            "credit_card_with_dashes",
            "Must be a valid credit card number with dashes",
        )
    }
    fn credit_card_dashes();
}

// ============================================================================
// TESTS
// ============================================================================
