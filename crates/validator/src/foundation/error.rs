//! Error types for validation failures
//!
//! A single structured error type carries a kind, a message, optional
//! parameters and the ordered list of causes that produced it. Combinators
//! never discard a child failure; they wrap it as a cause.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

/// Boxed error returned by user callbacks (predicates, transforms).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Stage of a sequential (AND) combinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    First,
    Second,
}

/// Classification of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorKind {
    /// The value is neither the expected type nor coercible to it.
    TypeMismatch,
    /// A coercion rule applied but the value could not be converted.
    CoercionFailure,
    /// A predicate returned false or raised.
    PredicateFailure,
    /// Text did not match a pattern.
    PatternMismatch,
    /// A pattern could not be compiled.
    PatternCompileFailure,
    /// A required map key is absent.
    MissingRequiredKey,
    /// The input map has keys the schema does not declare.
    UnexpectedKeys,
    /// A forbidden key's value matched its validator.
    ForbiddenKeyPresent,
    /// A value (or sequence) is not within the allowed set.
    SetMembershipFailure,
    /// One stage of a sequential combinator failed.
    SequentialStageFailure(Stage),
    /// Both branches of an alternative failed.
    AlternativeBothFailed,
    /// A transform function raised.
    TransformFailure,
    /// A transform function produced no result.
    TransformEmptyResult,
    /// The validator for one map key failed.
    KeyValidationFailed,
    /// A foreign error raised by a user callback.
    External,
}

impl ErrorKind {
    /// Stable snake_case code for programmatic handling.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::TypeMismatch => "type_mismatch",
            Self::CoercionFailure => "coercion_failure",
            Self::PredicateFailure => "predicate_failure",
            Self::PatternMismatch => "pattern_mismatch",
            Self::PatternCompileFailure => "pattern_compile_failure",
            Self::MissingRequiredKey => "missing_required_key",
            Self::UnexpectedKeys => "unexpected_keys",
            Self::ForbiddenKeyPresent => "forbidden_key_present",
            Self::SetMembershipFailure => "set_membership_failure",
            Self::SequentialStageFailure(Stage::First) => "first_stage_failure",
            Self::SequentialStageFailure(Stage::Second) => "second_stage_failure",
            Self::AlternativeBothFailed => "alternative_both_failed",
            Self::TransformFailure => "transform_failure",
            Self::TransformEmptyResult => "transform_empty_result",
            Self::KeyValidationFailed => "key_validation_failed",
            Self::External => "external",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

type Params = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

/// A structured validation error with a chain of causes.
///
/// # Examples
///
/// ```rust
/// use sift_validator::foundation::{ErrorKind, ValidationError};
///
/// let error = ValidationError::new(ErrorKind::KeyValidationFailed, "validation failed for key 'age'")
///     .with_key("age")
///     .with_cause(ValidationError::new(ErrorKind::PredicateFailure, "predicate failed to validate"));
///
/// assert_eq!(
///     error.to_string(),
///     "validation failed for key 'age' (predicate failed to validate)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    /// What went wrong.
    pub kind: ErrorKind,

    /// Human-readable message in English.
    pub message: Cow<'static, str>,

    /// Map key this failure is attributed to, if any.
    pub key: Option<String>,

    /// Ordered name/value parameters, e.g. `expected`, `pattern`.
    pub params: Params,

    /// Underlying failures, in the order they occurred.
    pub causes: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new validation error with a kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            key: None,
            params: SmallVec::new(),
            causes: Vec::new(),
        }
    }

    /// Attributes this error to a map key.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// Appends a single cause.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_cause(mut self, cause: ValidationError) -> Self {
        self.causes.push(cause);
        self
    }

    /// Appends several causes, keeping their order.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_causes(mut self, causes: impl IntoIterator<Item = ValidationError>) -> Self {
        self.causes.extend(causes);
        self
    }

    /// Looks up a parameter value by name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_ref())
    }

    #[must_use]
    pub fn has_causes(&self) -> bool {
        !self.causes.is_empty()
    }

    /// Returns the number of errors (including causes).
    #[must_use]
    pub fn total_error_count(&self) -> usize {
        1 + self
            .causes
            .iter()
            .map(ValidationError::total_error_count)
            .sum::<usize>()
    }

    /// Flattens the cause tree into a list (depth-first, self first).
    #[must_use]
    pub fn flatten(&self) -> Vec<&ValidationError> {
        let mut result = vec![self];
        for cause in &self.causes {
            result.extend(cause.flatten());
        }
        result
    }

    /// First error of `kind` in depth-first order, including `self`.
    #[must_use]
    pub fn find(&self, kind: ErrorKind) -> Option<&ValidationError> {
        self.flatten().into_iter().find(|e| e.kind == kind)
    }

    /// Follows the first cause down to the innermost error.
    #[must_use]
    pub fn root_cause(&self) -> &ValidationError {
        let mut current = self;
        while let Some(first) = current.causes.first() {
            current = first;
        }
        current
    }

    /// Converts a foreign error into an `External` error.
    ///
    /// A `ValidationError` is returned as-is. Otherwise the `source()` chain
    /// becomes the cause chain.
    pub fn from_error(error: &(dyn std::error::Error + 'static)) -> Self {
        if let Some(inner) = error.downcast_ref::<ValidationError>() {
            return inner.clone();
        }
        let mut converted = Self::new(ErrorKind::External, error.to_string());
        if let Some(source) = error.source() {
            converted.causes.push(Self::from_error(source));
        }
        converted
    }

    /// Like [`from_error`](Self::from_error) but takes ownership of a boxed error.
    pub fn from_boxed(error: BoxError) -> Self {
        match error.downcast::<ValidationError>() {
            Ok(inner) => *inner,
            Err(other) => Self::from_error(other.as_ref()),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;

        if !self.causes.is_empty() {
            f.write_str(" (")?;
            for (i, cause) in self.causes.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{cause}")?;
            }
            f.write_str(")")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.causes
            .first()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "type_mismatch" error naming the expected type.
    pub fn type_mismatch(expected: &'static str, actual: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::TypeMismatch,
            format!("type mismatch, expected a `{expected}` value"),
        )
        .with_param("expected", expected)
        .with_param("actual", actual.to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(message: &'static str) -> ValidationError {
        ValidationError::new(ErrorKind::PredicateFailure, message)
    }

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new(ErrorKind::PatternMismatch, "no match");
        assert_eq!(error.kind, ErrorKind::PatternMismatch);
        assert_eq!(error.message, "no match");
        assert_eq!(error.to_string(), "no match");
        assert!(!error.has_causes());
    }

    #[test]
    fn test_error_with_params() {
        let error = ValidationError::type_mismatch("integer", "string");
        assert_eq!(error.param("expected"), Some("integer"));
        assert_eq!(error.param("actual"), Some("string"));
        assert_eq!(error.param("missing"), None);
    }

    #[test]
    fn test_display_is_recursive() {
        let error = ValidationError::new(ErrorKind::AlternativeBothFailed, "both failed")
            .with_causes([
                leaf("left").with_cause(leaf("deep")),
                leaf("right"),
            ]);
        assert_eq!(error.to_string(), "both failed (left (deep), right)");
    }

    #[test]
    fn test_flatten_and_count() {
        let error = ValidationError::new(ErrorKind::AlternativeBothFailed, "root").with_causes([
            leaf("child1").with_cause(leaf("grandchild")),
            leaf("child2"),
        ]);

        assert_eq!(error.total_error_count(), 4);
        let messages: Vec<&str> = error.flatten().iter().map(|e| e.message.as_ref()).collect();
        assert_eq!(messages, ["root", "child1", "grandchild", "child2"]);
        assert_eq!(error.root_cause().message, "grandchild");
    }

    #[test]
    fn test_find() {
        let error = ValidationError::new(ErrorKind::KeyValidationFailed, "key")
            .with_cause(leaf("inner"));
        assert_eq!(
            error.find(ErrorKind::PredicateFailure).map(|e| e.message.as_ref()),
            Some("inner")
        );
        assert!(error.find(ErrorKind::TypeMismatch).is_none());
    }

    #[test]
    fn test_source_is_first_cause() {
        use std::error::Error;

        let error = ValidationError::new(ErrorKind::AlternativeBothFailed, "root")
            .with_causes([leaf("a"), leaf("b")]);
        let source = error.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("a"));
        assert!(leaf("a").source().is_none());
    }

    #[test]
    fn test_from_boxed_unwraps_validation_errors() {
        let boxed: BoxError = Box::new(leaf("mine"));
        let error = ValidationError::from_boxed(boxed);
        assert_eq!(error.kind, ErrorKind::PredicateFailure);
        assert_eq!(error.message, "mine");
    }

    #[test]
    fn test_from_boxed_wraps_foreign_errors() {
        let parse = "x".parse::<i64>().unwrap_err();
        let error = ValidationError::from_boxed(Box::new(parse));
        assert_eq!(error.kind, ErrorKind::External);
        assert_eq!(error.message, "invalid digit found in string");
    }

    #[test]
    fn test_kind_codes() {
        assert_eq!(ErrorKind::TypeMismatch.code(), "type_mismatch");
        assert_eq!(
            ErrorKind::SequentialStageFailure(Stage::Second).to_string(),
            "second_stage_failure"
        );
    }

    #[test]
    fn test_serialize() {
        let error = ValidationError::new(ErrorKind::MissingRequiredKey, "missing key 'x'")
            .with_key("x");
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["kind"], "missing_required_key");
        assert_eq!(json["key"], "x");
        assert_eq!(json["causes"], serde_json::json!([]));
    }
}
