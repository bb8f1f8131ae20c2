//! Prelude module for convenient imports.
//!
//! Provides a single `use stringcheck::prelude::*;` import that brings in
//! the builder, the rule contract, and every built-in rule.
//!
//! # Examples
//!
//! ```rust,ignore
//! use stringcheck::prelude::*;
//!
//! let ok = "user@example.com".validator().non_empty().valid_email().check();
//! assert!(ok);
//! ```

// ============================================================================
// FOUNDATION: Rule contract and errors
// ============================================================================

pub use crate::foundation::{BoxedRule, Rule, ValidationError};

// ============================================================================
// ENGINE: Builder and string extension
// ============================================================================

pub use crate::validator::{Validatable, Validator};

// ============================================================================
// RULES: All built-in rules and factories
// ============================================================================

pub use crate::rules::*;
