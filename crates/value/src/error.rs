//! Errors raised when extracting Rust types out of a `Value`.

use crate::kind::ValueKind;

/// Failure to view a [`Value`](crate::Value) as a concrete Rust type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ValueError {
    /// The value has a different kind than the one requested.
    #[error("expected {expected} value, found {actual}")]
    KindMismatch {
        expected: &'static str,
        actual: ValueKind,
    },

    /// A number does not fit the narrower target type.
    #[error("{value} is out of range for {target}")]
    OutOfRange { value: String, target: &'static str },

    /// An element of an array failed to convert.
    #[error("element {index}: {source}")]
    Element {
        index: usize,
        #[source]
        source: Box<ValueError>,
    },
}

impl ValueError {
    /// Creates a kind mismatch error.
    pub fn kind_mismatch(expected: &'static str, actual: ValueKind) -> Self {
        Self::KindMismatch { expected, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mismatch_display() {
        let err = ValueError::kind_mismatch("integer", ValueKind::String);
        assert_eq!(err.to_string(), "expected integer value, found string");
    }

    #[test]
    fn test_element_source() {
        use std::error::Error;

        let err = ValueError::Element {
            index: 2,
            source: Box::new(ValueError::OutOfRange {
                value: i64::MAX.to_string(),
                target: "i32",
            }),
        };
        assert!(err.to_string().starts_with("element 2:"));
        assert!(err.source().is_some());
    }
}
