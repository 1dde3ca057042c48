//! OR combinator - alternative validators
//!
//! This module provides the [`Or`] combinator: the first validator to
//! succeed produces the result.

use sift_value::Value;

use crate::foundation::{ErrorKind, Validate, ValidateTyped, ValidationError, ValidationResult};

/// Tries two validators in order.
///
/// If the first validator passes, the second is not evaluated. If both
/// fail, the combined error has exactly the two underlying errors as
/// causes, first then second.
///
/// # Examples
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let far = or(predicate(|x: &i64| *x > 10), predicate(|x: &i64| *x < -10));
/// assert!(far.validate(&Value::from(123)).is_ok());
///
/// let err = far.validate(&Value::from(5)).unwrap_err();
/// assert_eq!(err.kind, ErrorKind::AlternativeBothFailed);
/// assert_eq!(err.causes.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

fn both_failed(left: ValidationError, right: ValidationError) -> ValidationError {
    ValidationError::new(
        ErrorKind::AlternativeBothFailed,
        "both alternatives failed to validate",
    )
    .with_causes([left, right])
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate,
{
    fn validate(&self, value: &Value) -> ValidationResult<Value> {
        match self.left.validate(value) {
            Ok(output) => Ok(output),
            Err(left_error) => self
                .right
                .validate(value)
                .map_err(|right_error| both_failed(left_error, right_error)),
        }
    }
}

impl<L, R> ValidateTyped for Or<L, R>
where
    L: ValidateTyped,
    R: ValidateTyped<Input = L::Input, Output = L::Output>,
{
    type Input = L::Input;
    type Output = L::Output;

    fn validate_typed(&self, input: &L::Input) -> ValidationResult<L::Output> {
        match self.left.validate_typed(input) {
            Ok(output) => Ok(output),
            Err(left_error) => self
                .right
                .validate_typed(input)
                .map_err(|right_error| both_failed(left_error, right_error)),
        }
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate,
{
    Or::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{of_type, pattern, predicate};

    #[test]
    fn test_first_success_wins() {
        let either = or(of_type::<i64>(), of_type::<String>());
        // "4" coerces on the left before the right is tried
        assert_eq!(either.validate(&Value::from("4")), Ok(Value::from(4)));
        assert_eq!(either.validate(&Value::from("x")), Ok(Value::from("x")));
    }

    #[test]
    fn test_both_fail_keeps_both_causes() {
        let far = or(predicate(|x: &i64| *x > 10), predicate(|x: &i64| *x < -10));
        assert_eq!(far.validate(&Value::from(123)), Ok(Value::from(123)));
        assert_eq!(far.validate(&Value::from(-50)), Ok(Value::from(-50)));

        let err = far.validate(&Value::from(5)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::AlternativeBothFailed);
        assert_eq!(err.causes.len(), 2);
        assert_eq!(
            err.to_string(),
            "both alternatives failed to validate \
             (predicate failed to validate, predicate failed to validate)"
        );
    }

    #[test]
    fn test_causes_keep_order() {
        let either = pattern("^a").or(of_type::<bool>());
        let err = either.validate(&Value::from(3)).unwrap_err();
        assert_eq!(err.causes[0].param("expected"), Some("string"));
        assert_eq!(err.causes[1].param("expected"), Some("boolean"));
    }

    #[test]
    fn test_typed() {
        let far = or(predicate(|x: &i64| *x > 10), predicate(|x: &i64| *x < -10));
        assert_eq!(far.validate_typed(&-11), Ok(-11));
        assert!(far.validate_typed(&0).is_err());
    }
}
