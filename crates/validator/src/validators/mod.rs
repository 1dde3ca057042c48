//! Built-in leaf validators
//!
//! - **Type**: kind check with coercion ([`Type`], [`of_type`])
//! - **Predicate**: arbitrary boolean test ([`Predicate`], [`predicate`])
//! - **Membership**: fixed allowed set ([`Member`], [`one_of`])
//! - **Pattern**: regular expression on text ([`Pattern`], [`pattern`])
//! - **Transform**: fallible conversion ([`Transform`], [`transform`])
//!
//! # Examples
//!
//! ```rust
//! use sift_validator::prelude::*;
//!
//! let age = of_type::<i64>().and(predicate(|age: &i64| (18..=99).contains(age)));
//! assert_eq!(age.validate(&Value::from("28")), Ok(Value::from(28)));
//! ```

pub mod membership;
pub mod pattern;
pub mod predicate;
pub mod transform;
pub mod types;

pub use membership::{Member, one_of};
pub use pattern::{Pattern, pattern};
pub use predicate::{Predicate, predicate, try_predicate};
pub use transform::{Transform, transform, transform_optional};
pub use types::{Coercible, Type, of_type, of_type_with};

use sift_value::{FromValue, Value};

use crate::foundation::{ValidationError, ValidationResult};

/// Views `value` as a `T` without coercion, or reports a type mismatch.
pub(crate) fn extract<T: FromValue>(value: &Value) -> ValidationResult<T> {
    T::from_value(value).map_err(|_| ValidationError::type_mismatch(T::EXPECTED, value.kind()))
}
