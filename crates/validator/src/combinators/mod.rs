//! Combinators for composing validators
//!
//! - [`And`]: sequential, the first output feeds the second
//! - [`Or`]: alternative, the first success wins
//! - [`KeyedMap`]: string-keyed maps against a per-key table
//! - [`List`]: a lone value or every element of a sequence in a fixed set
//!
//! Combinators are validators themselves, so trees nest to any depth.

pub mod and;
pub mod keyed;
pub mod list;
pub mod or;

pub use and::{And, and};
pub use keyed::{Key, KeyedMap, keyed};
pub use list::{List, list};
pub use or::{Or, or};
