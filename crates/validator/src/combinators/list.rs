//! Homogeneous-list combinator

use std::hash::Hash;

use sift_value::{FromValue, Value};

use crate::foundation::{ErrorKind, Validate, ValidateTyped, ValidationError, ValidationResult};
use crate::validators::Member;

/// Set membership for a lone value or for every element of a sequence.
///
/// A sequence is returned as given when every element is allowed. Elements
/// of the wrong kind fail with a type mismatch naming both accepted shapes.
///
/// # Examples
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let digits = list([1_i64, 2, 3, 4]);
/// assert!(digits.validate(&Value::from(3)).is_ok());
/// assert!(digits.validate(&Value::array([1, 2, 3])).is_ok());
/// assert!(digits.validate(&Value::array([7, 2, 3])).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct List<T> {
    member: Member<T>,
}

impl<T> List<T>
where
    T: FromValue + Into<Value> + Hash + Eq + Clone,
{
    pub fn new(allowed: impl IntoIterator<Item = T>) -> Self {
        Self {
            member: Member::new(allowed),
        }
    }

    #[must_use]
    pub fn member(&self) -> &Member<T> {
        &self.member
    }

    fn shape_mismatch(value: &Value) -> ValidationError {
        ValidationError::new(
            ErrorKind::TypeMismatch,
            format!(
                "type mismatch, expected a `{}` or `[{}]` value",
                T::EXPECTED,
                T::EXPECTED
            ),
        )
        .with_param("expected", T::EXPECTED)
        .with_param("actual", value.kind().name())
    }
}

impl<T> Validate for List<T>
where
    T: FromValue + Into<Value> + Hash + Eq + Clone + Send + Sync,
{
    fn validate(&self, value: &Value) -> ValidationResult<Value> {
        match value.as_array() {
            Some(elements) => {
                let items = elements
                    .iter()
                    .map(|element| T::from_value(element).map_err(|_| Self::shape_mismatch(element)))
                    .collect::<ValidationResult<Vec<T>>>()?;
                self.member.validate_subset(&items)?;
            }
            None => {
                let item = T::from_value(value).map_err(|_| Self::shape_mismatch(value))?;
                self.member.validate_one(&item)?;
            }
        }
        Ok(value.clone())
    }
}

impl<T> ValidateTyped for List<T>
where
    T: FromValue + Into<Value> + Hash + Eq + Clone + Send + Sync,
{
    type Input = Vec<T>;
    type Output = Vec<T>;

    fn validate_typed(&self, input: &Vec<T>) -> ValidationResult<Vec<T>> {
        self.member.validate_subset(input)
    }
}

/// Homogeneous list over `allowed`.
pub fn list<T, I>(allowed: I) -> List<T>
where
    T: FromValue + Into<Value> + Hash + Eq + Clone,
    I: IntoIterator<Item = T>,
{
    List::new(allowed)
}
