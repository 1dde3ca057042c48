//! AND combinator - sequential composition of validators
//!
//! The output of the first validator is the input of the second. This is
//! how coercion feeds later checks: `of_type::<i64>().and(predicate(..))`
//! tests the parsed integer, not the original text.

use sift_value::Value;

use crate::foundation::{
    ErrorKind, Stage, Validate, ValidateTyped, ValidationError, ValidationResult,
};

/// Runs two validators in sequence.
///
/// A failure in either stage is wrapped in a
/// [`SequentialStageFailure`](ErrorKind::SequentialStageFailure) naming the
/// stage, with the stage's error as the only cause. The second stage is not
/// run when the first fails.
///
/// # Examples
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let even_big = and(
///     predicate(|x: &i64| *x > 10),
///     predicate(|x: &i64| x % 2 == 0),
/// );
/// assert!(even_big.validate(&Value::from(120)).is_ok());
/// assert_eq!(
///     even_big.validate(&Value::from(121)).unwrap_err().kind,
///     ErrorKind::SequentialStageFailure(Stage::Second)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the first stage.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the second stage.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

fn stage_failure(stage: Stage, cause: ValidationError) -> ValidationError {
    let message = match stage {
        Stage::First => "first stage failed",
        Stage::Second => "second stage failed",
    };
    ValidationError::new(ErrorKind::SequentialStageFailure(stage), message).with_cause(cause)
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate,
{
    fn validate(&self, value: &Value) -> ValidationResult<Value> {
        let intermediate = self
            .left
            .validate(value)
            .map_err(|e| stage_failure(Stage::First, e))?;
        self.right
            .validate(&intermediate)
            .map_err(|e| stage_failure(Stage::Second, e))
    }
}

impl<L, R> ValidateTyped for And<L, R>
where
    L: ValidateTyped,
    R: ValidateTyped<Input = L::Output>,
{
    type Input = L::Input;
    type Output = R::Output;

    fn validate_typed(&self, input: &L::Input) -> ValidationResult<R::Output> {
        let intermediate = self
            .left
            .validate_typed(input)
            .map_err(|e| stage_failure(Stage::First, e))?;
        self.right
            .validate_typed(&intermediate)
            .map_err(|e| stage_failure(Stage::Second, e))
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate,
{
    And::new(left, right)
}
