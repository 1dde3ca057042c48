//! Regular-expression validators
//!
//! A [`Pattern`] compiles its source at most once. [`Pattern::new`] defers
//! compilation to the first validation; [`Pattern::compiled`] compiles
//! immediately. Either way the outcome, success or failure, is cached for
//! the life of the instance.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use sift_value::Value;

use crate::foundation::{ErrorKind, Validate, ValidateTyped, ValidationError, ValidationResult};

/// Accepts text containing at least one match of a regular expression.
///
/// Matching is unanchored; use `^` and `$` to match the whole text.
///
/// # Examples
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let words = pattern("^[a-z ]+$");
/// assert!(words.validate(&Value::from("farts")).is_ok());
/// assert_eq!(
///     words.validate(&Value::from("gonna_do_it")).unwrap_err().kind,
///     ErrorKind::PatternMismatch
/// );
/// ```
pub struct Pattern {
    source: String,
    regex: OnceLock<Result<Regex, ValidationError>>,
}

impl Pattern {
    /// Lazily compiled pattern. Compile errors surface on first use.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            regex: OnceLock::new(),
        }
    }

    /// Compiles `source` now, returning the compile failure if any.
    pub fn compiled(source: impl Into<String>) -> ValidationResult<Self> {
        let pattern = Self::new(source);
        pattern.regex()?;
        Ok(pattern)
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The compiled expression, compiling it on first call.
    pub fn regex(&self) -> ValidationResult<&Regex> {
        self.regex
            .get_or_init(|| compile(&self.source))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Checks `text` against the pattern.
    pub fn check(&self, text: &str) -> ValidationResult<()> {
        if self.regex()?.is_match(text) {
            Ok(())
        } else {
            Err(ValidationError::new(
                ErrorKind::PatternMismatch,
                format!("'{text}' does not match pattern '{}'", self.source),
            )
            .with_param("pattern", self.source.clone()))
        }
    }
}

fn compile(source: &str) -> Result<Regex, ValidationError> {
    match Regex::new(source) {
        Ok(regex) => {
            tracing::debug!(pattern = source, "compiled pattern");
            Ok(regex)
        }
        Err(e) => {
            tracing::debug!(pattern = source, error = %e, "pattern failed to compile");
            Err(ValidationError::new(
                ErrorKind::PatternCompileFailure,
                format!("pattern '{source}' failed to compile"),
            )
            .with_param("pattern", source.to_owned())
            .with_cause(ValidationError::from_error(&e)))
        }
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("source", &self.source)
            .field("compiled", &self.regex.get().is_some())
            .finish()
    }
}

impl Validate for Pattern {
    fn validate(&self, value: &Value) -> ValidationResult<Value> {
        let text = value
            .as_str()
            .ok_or_else(|| ValidationError::type_mismatch("string", value.kind()))?;
        self.check(text)?;
        Ok(value.clone())
    }
}

impl ValidateTyped for Pattern {
    type Input = String;
    type Output = String;

    fn validate_typed(&self, input: &String) -> ValidationResult<String> {
        self.check(input)?;
        Ok(input.clone())
    }
}

/// Lazily compiled pattern validator.
pub fn pattern(source: impl Into<String>) -> Pattern {
    Pattern::new(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_match_and_mismatch() {
        let words = pattern("^[a-z ]+$");
        assert_eq!(words.validate(&Value::from("farts")), Ok(Value::from("farts")));

        let err = words.validate(&Value::from("gonna_do_it")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::PatternMismatch);
        assert_eq!(err.to_string(), "'gonna_do_it' does not match pattern '^[a-z ]+$'");
        assert_eq!(err.param("pattern"), Some("^[a-z ]+$"));
    }

    #[test]
    fn test_unanchored() {
        let digit = pattern(r"\d");
        assert!(digit.validate_typed(&"abc1def".to_owned()).is_ok());
        assert!(digit.validate_typed(&"abcdef".to_owned()).is_err());
    }

    #[test]
    fn test_non_text_is_type_mismatch() {
        let err = pattern("1").validate(&Value::from(1)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TypeMismatch);
        assert_eq!(err.param("expected"), Some("string"));
    }

    #[test]
    fn test_lazy_compile_failure_is_cached() {
        let broken = pattern("(unclosed");
        assert!(broken.regex.get().is_none());

        for _ in 0..2 {
            let err = broken.validate(&Value::from("x")).unwrap_err();
            assert_eq!(err.kind, ErrorKind::PatternCompileFailure);
            assert_eq!(err.causes.len(), 1);
        }
        assert!(broken.regex.get().is_some());
    }

    #[test]
    fn test_eager_compile() {
        assert!(Pattern::compiled("^ok$").is_ok());
        let err = Pattern::compiled("[").unwrap_err();
        assert_eq!(err.kind, ErrorKind::PatternCompileFailure);
        assert!(err.message.starts_with("pattern '[' failed to compile"));
    }

    #[test]
    fn test_concurrent_first_use() {
        let shared = Arc::new(pattern("^a+$"));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || shared.validate(&Value::from("aaa")).is_ok())
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
