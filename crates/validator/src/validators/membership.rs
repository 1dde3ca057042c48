//! Set membership validators

use std::fmt;
use std::hash::Hash;

use indexmap::IndexSet;
use sift_value::{FromValue, Value};

use super::extract;
use crate::foundation::{ErrorKind, Validate, ValidateTyped, ValidationError, ValidationResult};

/// Accepts values contained in a fixed set.
///
/// Error messages name the allowed set in declaration order, never the
/// offending element of a sequence.
///
/// # Examples
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let digits = one_of([1_i64, 2, 3, 4]);
/// assert_eq!(digits.validate_subset(&[1, 2, 3]), Ok(vec![1, 2, 3]));
///
/// let err = digits.validate_subset(&[7, 2, 3]).unwrap_err();
/// assert_eq!(err.to_string(), "[7, 2, 3] is not a subset of (1, 2, 3, 4)");
/// ```
#[derive(Clone)]
pub struct Member<T> {
    allowed: IndexSet<T>,
    described: String,
}

impl<T> Member<T>
where
    T: FromValue + Into<Value> + Hash + Eq + Clone,
{
    pub fn new(allowed: impl IntoIterator<Item = T>) -> Self {
        let allowed: IndexSet<T> = allowed.into_iter().collect();
        let described = allowed
            .iter()
            .map(render)
            .collect::<Vec<_>>()
            .join(", ");
        Self { allowed, described }
    }

    #[must_use]
    pub fn allowed(&self) -> &IndexSet<T> {
        &self.allowed
    }

    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.allowed.contains(item)
    }

    /// Accepts `item` if it is a member.
    pub fn validate_one(&self, item: &T) -> ValidationResult<T> {
        if self.contains(item) {
            Ok(item.clone())
        } else {
            Err(self.failure(format!("{} is not in ({})", render(item), self.described)))
        }
    }

    /// Accepts `items` if every element is a member. Order is preserved.
    pub fn validate_subset(&self, items: &[T]) -> ValidationResult<Vec<T>> {
        if items.iter().all(|item| self.contains(item)) {
            return Ok(items.to_vec());
        }

        let rendered = items.iter().map(render).collect::<Vec<_>>().join(", ");
        Err(self.failure(format!("[{rendered}] is not a subset of ({})", self.described)))
    }

    fn failure(&self, message: String) -> ValidationError {
        ValidationError::new(ErrorKind::SetMembershipFailure, message)
            .with_param("allowed", self.described.clone())
    }
}

fn render<T: Into<Value> + Clone>(item: &T) -> String {
    Into::<Value>::into(item.clone()).to_string()
}

impl<T: fmt::Debug> fmt::Debug for Member<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("allowed", &self.allowed)
            .finish()
    }
}

impl<T> Validate for Member<T>
where
    T: FromValue + Into<Value> + Hash + Eq + Clone + Send + Sync,
{
    fn validate(&self, value: &Value) -> ValidationResult<Value> {
        let item = extract::<T>(value)?;
        self.validate_one(&item)?;
        Ok(value.clone())
    }
}

impl<T> ValidateTyped for Member<T>
where
    T: FromValue + Into<Value> + Hash + Eq + Clone + Send + Sync,
{
    type Input = T;
    type Output = T;

    fn validate_typed(&self, input: &T) -> ValidationResult<T> {
        self.validate_one(input)
    }
}

/// Accepts members of `allowed`.
pub fn one_of<T, I>(allowed: I) -> Member<T>
where
    T: FromValue + Into<Value> + Hash + Eq + Clone,
    I: IntoIterator<Item = T>,
{
    Member::new(allowed)
}
