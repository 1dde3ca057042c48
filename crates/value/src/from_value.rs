//! Exact-kind extraction of Rust types from a `Value`.
//!
//! `FromValue` never coerces: an `Integer` is not a float, and the text
//! `"4"` is not an integer. Coercion is a validator concern.

use crate::error::ValueError;
use crate::value::{Object, Value};

/// Types that can be viewed out of a [`Value`] of the matching kind.
pub trait FromValue: Sized {
    /// Name of the expected type, used in mismatch messages.
    const EXPECTED: &'static str;

    /// Extracts `Self` if `value` already has the right kind.
    fn from_value(value: &Value) -> Result<Self, ValueError>;
}

fn mismatch<T: FromValue>(value: &Value) -> ValueError {
    ValueError::kind_mismatch(T::EXPECTED, value.kind())
}

impl FromValue for Value {
    const EXPECTED: &'static str = "value";

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        Ok(value.clone())
    }
}

impl FromValue for bool {
    const EXPECTED: &'static str = "boolean";

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        value.as_bool().ok_or_else(|| mismatch::<Self>(value))
    }
}

impl FromValue for i64 {
    const EXPECTED: &'static str = "integer";

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        value.as_i64().ok_or_else(|| mismatch::<Self>(value))
    }
}

impl FromValue for i32 {
    const EXPECTED: &'static str = "i32";

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        let wide = value.as_i64().ok_or_else(|| mismatch::<Self>(value))?;
        i32::try_from(wide).map_err(|_| ValueError::OutOfRange {
            value: wide.to_string(),
            target: Self::EXPECTED,
        })
    }
}

impl FromValue for f64 {
    const EXPECTED: &'static str = "float";

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        value.as_f64().ok_or_else(|| mismatch::<Self>(value))
    }
}

impl FromValue for f32 {
    const EXPECTED: &'static str = "f32";

    /// Rounds to the nearest `f32`. Finite values beyond the `f32` range are
    /// out of range rather than infinite.
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        let wide = value.as_f64().ok_or_else(|| mismatch::<Self>(value))?;
        let narrow = wide as f32;
        if wide.is_finite() && narrow.is_infinite() {
            return Err(ValueError::OutOfRange {
                value: wide.to_string(),
                target: Self::EXPECTED,
            });
        }
        Ok(narrow)
    }
}

impl FromValue for String {
    const EXPECTED: &'static str = "string";

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| mismatch::<Self>(value))
    }
}

impl FromValue for Object {
    const EXPECTED: &'static str = "object";

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        value
            .as_object()
            .cloned()
            .ok_or_else(|| mismatch::<Self>(value))
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    const EXPECTED: &'static str = "array";

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        let items = value.as_array().ok_or_else(|| mismatch::<Self>(value))?;
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                T::from_value(item).map_err(|e| ValueError::Element {
                    index,
                    source: Box::new(e),
                })
            })
            .collect()
    }
}
