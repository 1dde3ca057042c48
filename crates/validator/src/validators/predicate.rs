//! Arbitrary boolean tests

use std::fmt;

use sift_value::{FromValue, Value};

use super::extract;
use crate::foundation::{
    BoxError, ErrorKind, Validate, ValidateTyped, ValidationError, ValidationResult,
};

type Test<T> = Box<dyn Fn(&T) -> Result<bool, BoxError> + Send + Sync>;

/// Accepts a value when a test returns `true`.
///
/// The value is passed through unchanged. A test that raises fails the
/// validation with the raised error as the cause.
///
/// # Examples
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let adult = predicate(|age: &i64| (18..=99).contains(age));
/// assert!(adult.validate(&Value::from(28)).is_ok());
/// assert_eq!(
///     adult.validate(&Value::from(8)).unwrap_err().kind,
///     ErrorKind::PredicateFailure
/// );
/// ```
pub struct Predicate<T> {
    test: Test<T>,
}

impl<T: FromValue> Predicate<T> {
    /// Builds a predicate from an infallible test.
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            test: Box::new(move |input| Ok(test(input))),
        }
    }

    /// Builds a predicate from a test that may raise.
    pub fn try_new<F>(test: F) -> Self
    where
        F: Fn(&T) -> Result<bool, BoxError> + Send + Sync + 'static,
    {
        Self {
            test: Box::new(test),
        }
    }

    /// Runs the test on an already-typed input.
    pub fn check(&self, input: &T) -> ValidationResult<()> {
        match (self.test)(input) {
            Ok(true) => Ok(()),
            Ok(false) => Err(failure()),
            Err(raised) => Err(failure().with_cause(ValidationError::from_boxed(raised))),
        }
    }
}

fn failure() -> ValidationError {
    ValidationError::new(ErrorKind::PredicateFailure, "predicate failed to validate")
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}

impl<T: FromValue> Validate for Predicate<T> {
    fn validate(&self, value: &Value) -> ValidationResult<Value> {
        let input = extract::<T>(value)?;
        self.check(&input)?;
        Ok(value.clone())
    }
}

impl<T: FromValue + Clone> ValidateTyped for Predicate<T> {
    type Input = T;
    type Output = T;

    fn validate_typed(&self, input: &T) -> ValidationResult<T> {
        self.check(input)?;
        Ok(input.clone())
    }
}

/// Accepts values for which `test` returns `true`.
pub fn predicate<T, F>(test: F) -> Predicate<T>
where
    T: FromValue,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    Predicate::new(test)
}

/// Like [`predicate`], for tests that may raise.
pub fn try_predicate<T, F>(test: F) -> Predicate<T>
where
    T: FromValue,
    F: Fn(&T) -> Result<bool, BoxError> + Send + Sync + 'static,
{
    Predicate::try_new(test)
}
