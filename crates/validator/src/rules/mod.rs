//! Built-in rules
//!
//! The concrete checks a [`Validator`](crate::Validator) can append. Each
//! is a standalone [`Rule`](crate::foundation::Rule) usable on its own;
//! the fluent methods on `Validator` are thin wrappers over these types.
//!
//! # Categories
//!
//! - **Length**: [`NonEmpty`], [`MinLength`], [`MaxLength`]
//! - **Numeric**: [`DecimalNumber`], [`GreaterThan`], [`LessThan`],
//!   [`EqualTo`] and the `OrEqual` variants
//! - **Character classes**: case, digit, and special-character composition
//! - **Relations**: equality and substring checks against a target string
//! - **Formats**: [`Email`], [`Url`], [`MatchesPattern`]
//! - **Credit cards**: digit-only and separated card shapes
//! - **Escape hatch**: [`Custom`] for closure-backed one-offs

pub mod charset;
pub mod content;
pub mod credit_card;
pub mod custom;
pub mod length;
pub mod numeric;
pub mod relation;

// ============================================================================
// RE-EXPORTS: Length rules
// ============================================================================

pub use length::{MaxLength, MinLength, NonEmpty, max_length, min_length, non_empty};

// ============================================================================
// RE-EXPORTS: Numeric rules
// ============================================================================

pub use numeric::{
    DecimalNumber, EqualTo, GreaterThan, GreaterThanOrEqual, LessThan, LessThanOrEqual,
    decimal_number, greater_than, greater_than_or_equal, less_than, less_than_or_equal,
    number_equal_to,
};

// ============================================================================
// RE-EXPORTS: Character-class rules
// ============================================================================

pub use charset::{
    AllLowercase, AllUppercase, AnyDigit, AnyLowercase, AnySpecialCharacter, AnyUppercase,
    NoDigits, NoSpecialCharacters, OnlyDigits, StartsWithDigit, StartsWithNonDigit, all_lowercase,
    all_uppercase, any_digit, any_lowercase, any_special_character, any_uppercase, no_digits,
    no_special_characters, only_digits, starts_with_digit, starts_with_non_digit,
};

// ============================================================================
// RE-EXPORTS: Relation rules
// ============================================================================

pub use relation::{
    Contains, EndsWith, EqualsText, NotContains, NotEqualsText, StartsWith, equals_text,
    not_equals_text, text_contains, text_ends_with, text_not_contains, text_starts_with,
};

// ============================================================================
// RE-EXPORTS: Format rules
// ============================================================================

pub use content::{Email, MatchesPattern, Url, email, matches_pattern, url};

// ============================================================================
// RE-EXPORTS: Credit-card rules
// ============================================================================

pub use credit_card::{
    CreditCardDashes, CreditCardDigits, CreditCardSpaces, credit_card_dashes, credit_card_digits,
    credit_card_spaces,
};

// ============================================================================
// RE-EXPORTS: Escape hatch
// ============================================================================

pub use custom::{Custom, custom};
