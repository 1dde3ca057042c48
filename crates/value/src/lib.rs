//! # sift-value
//!
//! The dynamically-typed value that sift validators consume and produce.
//!
//! ```rust
//! use sift_value::{Value, ValueKind};
//!
//! let v = Value::from(42);
//! assert_eq!(v.kind(), ValueKind::Integer);
//! assert_eq!(v.to_string(), "42");
//! ```
//!
//! Values convert to and from `serde_json::Value`, so JSON literals are the
//! easiest way to build nested inputs:
//!
//! ```rust
//! use serde_json::json;
//! use sift_value::Value;
//!
//! let v = Value::from(json!({"name": "Sue", "age": 28}));
//! assert_eq!(v.get("age"), Some(&Value::Integer(28)));
//! ```

pub mod conversions;
pub mod display;
pub mod error;
pub mod from_value;
pub mod kind;
pub mod value;

pub use error::ValueError;
pub use from_value::FromValue;
pub use kind::ValueKind;
pub use value::{Object, Value};

/// Common imports.
pub mod prelude {
    pub use crate::{FromValue, Object, Value, ValueError, ValueKind};
}
