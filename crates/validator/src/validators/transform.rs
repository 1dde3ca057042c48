//! Conversion validators

use std::fmt;

use sift_value::{FromValue, Value};

use super::extract;
use crate::foundation::{
    BoxError, ErrorKind, Validate, ValidateTyped, ValidationError, ValidationResult,
};

type Convert<I, O> = Box<dyn Fn(&I) -> Result<Option<O>, BoxError> + Send + Sync>;

/// Applies a conversion function that may fail.
///
/// A raised error fails the validation with the error as its cause. A
/// transform built with [`Transform::optional`] also fails when the
/// function produces no result.
///
/// # Examples
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let length = transform(|s: &String| Ok(s.chars().count() as i64));
/// assert_eq!(length.validate(&Value::from("hello")), Ok(Value::from(5)));
/// ```
pub struct Transform<I, O> {
    convert: Convert<I, O>,
}

impl<I, O> Transform<I, O>
where
    I: FromValue,
    O: Into<Value>,
{
    pub fn new<F>(convert: F) -> Self
    where
        F: Fn(&I) -> Result<O, BoxError> + Send + Sync + 'static,
    {
        Self {
            convert: Box::new(move |input| convert(input).map(Some)),
        }
    }

    /// A transform whose function may produce no result.
    pub fn optional<F>(convert: F) -> Self
    where
        F: Fn(&I) -> Result<Option<O>, BoxError> + Send + Sync + 'static,
    {
        Self {
            convert: Box::new(convert),
        }
    }

    /// Applies the conversion to an already-typed input.
    pub fn apply(&self, input: &I) -> ValidationResult<O> {
        match (self.convert)(input) {
            Ok(Some(output)) => Ok(output),
            Ok(None) => Err(ValidationError::new(
                ErrorKind::TransformEmptyResult,
                "schema result was empty",
            )),
            Err(raised) => Err(ValidationError::new(
                ErrorKind::TransformFailure,
                "schema failed to validate",
            )
            .with_cause(ValidationError::from_boxed(raised))),
        }
    }
}

impl<I, O> fmt::Debug for Transform<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform").finish_non_exhaustive()
    }
}

impl<I, O> Validate for Transform<I, O>
where
    I: FromValue,
    O: Into<Value>,
{
    fn validate(&self, value: &Value) -> ValidationResult<Value> {
        let input = extract::<I>(value)?;
        self.apply(&input).map(Into::into)
    }
}

impl<I, O> ValidateTyped for Transform<I, O>
where
    I: FromValue,
    O: Into<Value>,
{
    type Input = I;
    type Output = O;

    fn validate_typed(&self, input: &I) -> ValidationResult<O> {
        self.apply(input)
    }
}

/// Applies `convert`, failing if it raises.
pub fn transform<I, O, F>(convert: F) -> Transform<I, O>
where
    I: FromValue,
    O: Into<Value>,
    F: Fn(&I) -> Result<O, BoxError> + Send + Sync + 'static,
{
    Transform::new(convert)
}

/// Applies `convert`, failing if it raises or produces nothing.
pub fn transform_optional<I, O, F>(convert: F) -> Transform<I, O>
where
    I: FromValue,
    O: Into<Value>,
    F: Fn(&I) -> Result<Option<O>, BoxError> + Send + Sync + 'static,
{
    Transform::optional(convert)
}
