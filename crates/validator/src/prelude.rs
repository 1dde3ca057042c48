//! Prelude module for convenient imports.
//!
//! Provides a single `use sift_validator::prelude::*;` import that brings
//! in the traits, error types, leaf validators and combinators.
//!
//! # Examples
//!
//! ```rust
//! use sift_validator::prelude::*;
//!
//! let far = predicate(|x: &i64| *x > 10).or(predicate(|x: &i64| *x < -10));
//! assert!(far.validate(&Value::from(-20)).is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    BoxError, BoxedValidator, ErrorKind, Stage, Validate, ValidateExt, ValidateTyped,
    ValidationError, ValidationResult, validate_value,
};

// ============================================================================
// CONFIGURATION
// ============================================================================

pub use crate::config::{CoercionPolicy, ValidatorConfig};

// ============================================================================
// VALIDATORS
// ============================================================================

pub use crate::validators::{
    Coercible, Member, Pattern, Predicate, Transform, Type, of_type, of_type_with, one_of,
    pattern, predicate, transform, transform_optional, try_predicate,
};

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{And, Key, KeyedMap, List, Or, and, keyed, list, or};

// ============================================================================
// VALUES
// ============================================================================

pub use sift_value::{FromValue, Object, Value, ValueKind};
