//! # stringcheck
//!
//! A fluent string-validation builder for form inputs.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stringcheck::prelude::*;
//!
//! let ok = Validator::new("test@example.com")
//!     .non_empty()
//!     .valid_email()
//!     .on_error(|message| eprintln!("invalid: {message}"))
//!     .check();
//! assert!(ok);
//! ```
//!
//! ## How it works
//!
//! Each fluent call appends one [`Rule`](foundation::Rule) to the builder;
//! the terminal [`check`](Validator::check) evaluates rules in insertion
//! order and stops at the first failure, so only the first error is ever
//! reported. One builder validates one string; this is not a
//! schema/object validator.
//!
//! ## Creating Rules
//!
//! Use the [`rule!`] macro for zero-boilerplate rule types, implement
//! [`Rule`](foundation::Rule) manually for complex cases, or reach for
//! [`Custom`](rules::Custom) and [`Validator::add_rule`] for one-offs.

pub mod foundation;
mod macros;
pub mod prelude;
pub mod rules;
pub mod validator;

pub use foundation::{Rule, ValidationError};
pub use validator::{Validatable, Validator};
