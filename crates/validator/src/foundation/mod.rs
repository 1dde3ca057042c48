//! Core validation types and traits
//!
//! - **Traits**: `Validate`, `ValidateTyped`, `ValidateExt`
//! - **Errors**: `ValidationError`, `ErrorKind`, `Stage`
//!
//! Validators are values. A schema is a tree of them, built once and then
//! shared freely; `validate` never mutates the validator or its input.

pub mod error;
pub mod traits;

pub use error::{BoxError, ErrorKind, Stage, ValidationError};
pub use traits::{BoxedValidator, Validate, ValidateExt, ValidateTyped};

use sift_value::Value;

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value with a validator.
///
/// Convenience for one-off validations where argument order reads better
/// with the value first.
///
/// # Examples
///
/// ```rust
/// use sift_validator::foundation::validate_value;
/// use sift_validator::validators::of_type;
/// use sift_value::Value;
///
/// let result = validate_value(&Value::from("4"), &of_type::<i64>());
/// assert_eq!(result, Ok(Value::from(4)));
/// ```
#[must_use = "validation result must be checked"]
pub fn validate_value<V>(value: &Value, validator: &V) -> ValidationResult<Value>
where
    V: Validate + ?Sized,
{
    validator.validate(value)
}
