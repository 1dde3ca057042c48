//! # sift-validator
//!
//! Declarative, composable validation for dynamically-typed values.
//!
//! A schema is a tree of validators: leaves check or convert a single
//! value, combinators compose them. Calling `validate` on the root returns
//! either the validated (possibly coerced) value or a [`ValidationError`]
//! whose causes explain what did not match and why.
//!
//! ## Quick Start
//!
//! ```rust
//! use sift_validator::prelude::*;
//!
//! let person = KeyedMap::new()
//!     .required("name", of_type::<String>())
//!     .required("age", of_type::<i64>().and(predicate(|age: &i64| (18..=99).contains(age))))
//!     .optional("role", list(["admin".to_owned(), "user".to_owned()]));
//!
//! let input = Value::object([("name", "Sue"), ("age", "28")]);
//! let output = person.validate(&input).unwrap();
//! assert_eq!(output.get("age"), Some(&Value::from(28)));
//! ```
//!
//! ## Leaves
//!
//! - [`Type`](validators::Type): kind check with coercion
//! - [`Predicate`](validators::Predicate): arbitrary boolean test
//! - [`Member`](validators::Member): fixed allowed set
//! - [`Pattern`](validators::Pattern): regular expression on text
//! - [`Transform`](validators::Transform): fallible conversion
//!
//! ## Combinators
//!
//! - [`And`](combinators::And), [`Or`](combinators::Or)
//! - [`KeyedMap`](combinators::KeyedMap) with required, optional and
//!   forbidden [`Key`](combinators::Key)s
//! - [`List`](combinators::List)
//!
//! [`ValidationError`]: foundation::ValidationError

// ValidationError is the error type of every validator; boxing it would add
// an allocation to every failing call.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod config;
pub mod foundation;
pub mod prelude;
pub mod validators;

pub use sift_value as value;
