//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation
//! system:
//!
//! - **Traits**: [`Rule`]
//! - **Errors**: [`ValidationError`]
//!
//! Every check — built-in or custom — is a [`Rule`]: a pure predicate over
//! the input string plus a structured failure description. The
//! [`Validator`](crate::Validator) engine owns an ordered list of boxed
//! rules and evaluates them with short-circuit semantics.

pub mod error;
pub mod rule;

pub use error::ValidationError;
pub use rule::Rule;

/// A boxed, type-erased rule as stored by a [`Validator`](crate::Validator).
pub type BoxedRule = Box<dyn Rule>;
