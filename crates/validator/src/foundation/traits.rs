//! Core traits for the validation system
//!
//! Every leaf validator and every combinator implements [`Validate`], the
//! untyped contract over [`Value`]. Validators whose domain is statically
//! known also implement [`ValidateTyped`] with identical semantics.

use std::sync::Arc;

use sift_value::Value;

use crate::combinators::{And, Or};
use crate::foundation::ValidationResult;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// A validator either returns the (possibly coerced or transformed) value or
/// a [`ValidationError`](crate::foundation::ValidationError). The input is
/// never mutated.
///
/// # Examples
///
/// ```rust
/// use sift_validator::foundation::{ErrorKind, Validate, ValidationError};
/// use sift_value::Value;
///
/// struct NotNull;
///
/// impl Validate for NotNull {
///     fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
///         if value.is_null() {
///             Err(ValidationError::new(ErrorKind::PredicateFailure, "value is null"))
///         } else {
///             Ok(value.clone())
///         }
///     }
/// }
///
/// assert!(NotNull.validate(&Value::from(1)).is_ok());
/// assert!(NotNull.validate(&Value::Null).is_err());
/// ```
pub trait Validate: Send + Sync {
    /// Validates `value`, producing the output value on success.
    fn validate(&self, value: &Value) -> ValidationResult<Value>;
}

/// Typed entry point for validators whose domain is statically known.
///
/// `validate_typed` must agree with [`Validate::validate`] on every input
/// that both accept.
pub trait ValidateTyped: Validate {
    /// The logical input type.
    type Input;

    /// The type produced on success.
    type Output;

    /// Validates an already-typed input.
    fn validate_typed(&self, input: &Self::Input) -> ValidationResult<Self::Output>;
}

/// A type-erased validator.
pub type BoxedValidator = Box<dyn Validate>;

impl<V: Validate + ?Sized> Validate for Box<V> {
    fn validate(&self, value: &Value) -> ValidationResult<Value> {
        (**self).validate(value)
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    fn validate(&self, value: &Value) -> ValidationResult<Value> {
        (**self).validate(value)
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    fn validate(&self, value: &Value) -> ValidationResult<Value> {
        (**self).validate(value)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every sized [`Validate`].
///
/// # Examples
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let validator = of_type::<i64>().and(predicate(|x: &i64| *x > 10));
/// assert_eq!(validator.validate(&Value::from("42")), Ok(Value::from(42)));
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Runs `self`, then feeds its output to `next`.
    fn and<V: Validate>(self, next: V) -> And<Self, V> {
        And::new(self, next)
    }

    /// Tries `self`, then `other`; the first success wins.
    fn or<V: Validate>(self, other: V) -> Or<Self, V> {
        Or::new(self, other)
    }

    /// Erases the concrete validator type.
    fn boxed(self) -> BoxedValidator
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<T: Validate + Sized> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================
