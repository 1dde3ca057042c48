//! Value kinds.
//!
//! `ValueKind` is a fieldless classification of [`Value`](crate::Value),
//! used in error messages and for cheap kind comparisons.

use std::fmt::{Display, Formatter};

/// Represents the kind of a `Value`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Float,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Null,
        Self::Boolean,
        Self::Integer,
        Self::Float,
        Self::String,
        Self::Array,
        Self::Object,
    ];

    /// Check if this kind is numeric
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }

    /// Check if this kind is a collection
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::Array | Self::Object)
    }

    /// Scalars are booleans, numbers and strings. `Null` is neither.
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Boolean | Self::Integer | Self::Float | Self::String
        )
    }

    /// Get a descriptive name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_lowercase() {
        for kind in ValueKind::ALL {
            assert_eq!(kind.name(), kind.name().to_lowercase());
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn test_classification() {
        assert!(ValueKind::Integer.is_numeric());
        assert!(ValueKind::Float.is_numeric());
        assert!(!ValueKind::String.is_numeric());
        assert!(ValueKind::Array.is_collection());
        assert!(ValueKind::String.is_scalar());
        assert!(!ValueKind::Null.is_scalar());
        assert!(!ValueKind::Object.is_scalar());
    }
}
