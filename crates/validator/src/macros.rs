//! The [`rule!`] macro: declare a complete rule with minimal boilerplate.
//!
//! A rule declaration expands to the struct definition, the
//! [`Rule`](crate::foundation::Rule) implementation, a `new` constructor,
//! and a snake_case factory function.
//!
//! # Examples
//!
//! ```rust,ignore
//! use stringcheck::rule;
//! use stringcheck::foundation::ValidationError;
//!
//! // Unit rule (no fields)
//! rule! {
//!     pub NonEmpty;
//!     check(input) { !input.is_empty() }
//!     describe() { ValidationError::new("non_empty", "Must not be empty") }
//!     fn non_empty();
//! }
//!
//! // Rule with fields
//! rule! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub MinLength { min: usize };
//!     check(self, input) { input.chars().count() >= self.min }
//!     describe(self) {
//!         ValidationError::new("min_length", format!("Must be at least {} characters", self.min))
//!     }
//!     fn min_length(min: usize);
//! }
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates a complete rule: struct definition, [`Rule`](crate::foundation::Rule)
/// implementation, constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via
/// `#[derive(...)]`.
///
/// # Variants
///
/// **Unit rule** (zero-sized, no fields):
/// ```rust,ignore
/// rule! {
///     pub NonEmpty;
///     check(input) { !input.is_empty() }
///     describe() { ValidationError::new("non_empty", "empty") }
///     fn non_empty();
/// }
/// ```
///
/// **Rule with fields** (auto `new` from all fields):
/// ```rust,ignore
/// rule! {
///     pub MinLength { min: usize };
///     check(self, input) { input.chars().count() >= self.min }
///     describe(self) { ValidationError::new("min_length", "too short") }
///     fn min_length(min: usize);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`, e.g. for `impl Into<_>`
/// arguments):
/// ```rust,ignore
/// rule! {
///     pub Contains { target: String };
///     check(self, input) { input.contains(&self.target) }
///     describe(self) { ValidationError::new("contains", "missing substring") }
///     new(target: impl Into<String>) { Self { target: target.into() } }
///     fn contains(target: impl Into<String>);
/// }
/// ```
///
/// **Fallible constructor** (for rules whose configuration can be rejected;
/// the type after `->` is the error type, wrapped in `Result` by the macro):
/// ```rust,ignore
/// rule! {
///     pub MatchesPattern { pattern: regex::Regex };
///     check(self, input) { self.pattern.is_match(input) }
///     describe(self) { ValidationError::invalid_format("pattern") }
///     new(pattern: &str) -> regex::Error {
///         Ok(Self { pattern: regex::Regex::new(pattern)? })
///     }
///     fn matches_pattern(pattern: &str) -> regex::Error;
/// }
/// ```
#[macro_export]
macro_rules! rule {
    // ── Variant 1a: Unit rule (no fields) + factory fn ───────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        check($inp:ident) $check:block
        describe() $desc:block
        fn $factory:ident();
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name;
            check($inp) $check
            describe() $desc
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: Unit rule (no fields), no factory ────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        check($inp:ident) $check:block
        describe() $desc:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Rule for $name {
            #[allow(unused_variables)]
            fn validate(&self, $inp: &str) -> bool $check

            fn describe(&self) -> $crate::foundation::ValidationError $desc
        }
    };

    // ── Variant 2a: Struct with fields + fallible new + fallible factory ─
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        check($self_:ident, $inp:ident) $check:block
        describe($self2:ident) $desc:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $efty:ty;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body
        }

        impl $crate::foundation::Rule for $name {
            fn validate(&$self_, $inp: &str) -> bool $check

            fn describe(&$self2) -> $crate::foundation::ValidationError $desc
        }

        $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $efty> {
            $name::new($($farg),*)
        }
    };

    // ── Variant 3a: Struct with fields + custom new + factory fn ─────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        check($self_:ident, $inp:ident) $check:block
        describe($self2:ident) $desc:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            check($self_, $inp) $check
            describe($self2) $desc
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 3b: Struct with fields + custom new, no factory ──────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        check($self_:ident, $inp:ident) $check:block
        describe($self2:ident) $desc:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Rule for $name {
            fn validate(&$self_, $inp: &str) -> bool $check

            fn describe(&$self2) -> $crate::foundation::ValidationError $desc
        }
    };

    // ── Variant 4a: Struct with fields + auto new + factory fn ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        check($self_:ident, $inp:ident) $check:block
        describe($self2:ident) $desc:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            check($self_, $inp) $check
            describe($self2) $desc
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 4b: Struct with fields + auto new, no factory ────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        check($self_:ident, $inp:ident) $check:block
        describe($self2:ident) $desc:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Rule for $name {
            fn validate(&$self_, $inp: &str) -> bool $check

            fn describe(&$self2) -> $crate::foundation::ValidationError $desc
        }
    };
}

// ============================================================================
// TESTS
// ============================================================================
