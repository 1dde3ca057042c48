//! Type check with coercion
//!
//! [`Type<T>`] accepts values that already have the target kind and
//! converts a small, fixed set of other kinds. Coercion is one level deep:
//! text becomes a number or a boolean, anything but null becomes text.
//! Nothing else.

use std::fmt;
use std::marker::PhantomData;

use sift_value::{FromValue, Object, Value, ValueError};

use crate::config::{CoercionPolicy, ValidatorConfig};
use crate::foundation::{ErrorKind, Validate, ValidateTyped, ValidationError, ValidationResult};

// ============================================================================
// COERCIBLE TARGETS
// ============================================================================

/// A target type of the [`Type`] validator.
///
/// `coerce_from` holds the target-specific rule and is only consulted after
/// an exact-kind match has failed. Returning `None` means no rule applies.
pub trait Coercible: FromValue + Into<Value> {
    fn coerce_from(_value: &Value, _policy: &CoercionPolicy) -> Option<ValidationResult<Self>> {
        None
    }
}

fn coercion_failure<T: FromValue>(text: &str, cause: Option<ValidationError>) -> ValidationError {
    let error = ValidationError::new(
        ErrorKind::CoercionFailure,
        format!("cannot convert '{text}' to a `{}` value", T::EXPECTED),
    )
    .with_param("expected", T::EXPECTED);

    match cause {
        Some(cause) => error.with_cause(cause),
        None => error,
    }
}

/// Parses text with `FromStr`, mapping parse errors to a coercion failure.
fn parse_text<T>(value: &Value) -> Option<ValidationResult<T>>
where
    T: FromValue + std::str::FromStr,
    T::Err: std::error::Error + 'static,
{
    let text = value.as_str()?;
    Some(
        text.parse::<T>()
            .map_err(|e| coercion_failure::<T>(text, Some(ValidationError::from_error(&e)))),
    )
}

impl Coercible for i64 {
    fn coerce_from(value: &Value, _policy: &CoercionPolicy) -> Option<ValidationResult<Self>> {
        parse_text(value)
    }
}

impl Coercible for i32 {
    fn coerce_from(value: &Value, _policy: &CoercionPolicy) -> Option<ValidationResult<Self>> {
        parse_text(value)
    }
}

impl Coercible for f64 {
    fn coerce_from(value: &Value, _policy: &CoercionPolicy) -> Option<ValidationResult<Self>> {
        parse_text(value)
    }
}

impl Coercible for f32 {
    fn coerce_from(value: &Value, _policy: &CoercionPolicy) -> Option<ValidationResult<Self>> {
        parse_text(value)
    }
}

impl Coercible for String {
    fn coerce_from(value: &Value, _policy: &CoercionPolicy) -> Option<ValidationResult<Self>> {
        value.to_text().map(Ok)
    }
}

impl Coercible for bool {
    fn coerce_from(value: &Value, policy: &CoercionPolicy) -> Option<ValidationResult<Self>> {
        let text = value.as_str()?;
        let lowered = text.to_ascii_lowercase();

        Some(match lowered.as_str() {
            "t" | "true" | "yes" | "y" => Ok(true),
            "f" | "false" | "no" | "n" => Ok(false),
            _ if policy.strict_booleans => Err(coercion_failure::<bool>(text, None)),
            _ => Ok(false),
        })
    }
}

impl Coercible for Vec<Value> {}

impl Coercible for Object {}

impl Coercible for Value {}

// ============================================================================
// TYPE VALIDATOR
// ============================================================================

/// Checks that a value is a `T`, coercing where a rule applies.
///
/// Rules, in order:
///
/// 1. a value of the target kind is accepted unchanged, except that `i32`
///    and `f32` targets narrow it and fail when it does not fit;
/// 2. integer targets parse text;
/// 3. float targets parse text;
/// 4. string targets take the textual form of any non-null value;
/// 5. boolean targets read `t`, `true`, `yes` and `y` (any case) as true
///    and other text as false;
/// 6. anything else is a type mismatch naming the target.
///
/// # Examples
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let age = of_type::<i64>();
/// assert_eq!(age.validate(&Value::from("4")), Ok(Value::from(4)));
///
/// let err = age.validate(&Value::from("four")).unwrap_err();
/// assert_eq!(err.kind, ErrorKind::CoercionFailure);
/// ```
pub struct Type<T> {
    policy: CoercionPolicy,
    _target: PhantomData<fn() -> T>,
}

impl<T: Coercible> Type<T> {
    /// Type check with the default coercion policy.
    pub fn new() -> Self {
        Self::with_policy(CoercionPolicy::default())
    }

    pub fn with_policy(policy: CoercionPolicy) -> Self {
        Self {
            policy,
            _target: PhantomData,
        }
    }

    /// Type check using the coercion policy of `config`.
    pub fn with_config(config: &ValidatorConfig) -> Self {
        Self::with_policy(config.coercion)
    }

    #[must_use]
    pub fn policy(&self) -> &CoercionPolicy {
        &self.policy
    }

    /// Checks or coerces `value` into a `T`.
    pub fn check(&self, value: &Value) -> ValidationResult<T> {
        match T::from_value(value) {
            Ok(exact) => return Ok(exact),
            Err(ValueError::OutOfRange { value: wide, target }) => {
                return Err(ValidationError::new(
                    ErrorKind::CoercionFailure,
                    format!("{wide} is out of range for a `{target}` value"),
                )
                .with_param("expected", target));
            }
            Err(_) => {}
        }

        if self.policy.coerce {
            if let Some(coerced) = T::coerce_from(value, &self.policy) {
                return coerced;
            }
        }

        Err(ValidationError::type_mismatch(T::EXPECTED, value.kind()))
    }
}

impl<T: Coercible> Default for Type<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Type<T> {
    fn clone(&self) -> Self {
        Self {
            policy: self.policy,
            _target: PhantomData,
        }
    }
}

impl<T: FromValue> fmt::Debug for Type<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Type")
            .field("target", &T::EXPECTED)
            .field("policy", &self.policy)
            .finish()
    }
}

impl<T: Coercible> Validate for Type<T> {
    fn validate(&self, value: &Value) -> ValidationResult<Value> {
        self.check(value).map(Into::into)
    }
}

impl<T: Coercible> ValidateTyped for Type<T> {
    type Input = Value;
    type Output = T;

    fn validate_typed(&self, input: &Value) -> ValidationResult<T> {
        self.check(input)
    }
}

/// Type check with the default coercion policy.
pub fn of_type<T: Coercible>() -> Type<T> {
    Type::new()
}

/// Type check with an explicit coercion policy.
pub fn of_type_with<T: Coercible>(policy: CoercionPolicy) -> Type<T> {
    Type::with_policy(policy)
}

// ============================================================================
// TESTS
// ============================================================================
