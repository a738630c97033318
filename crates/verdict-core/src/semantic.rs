//! Semantic evaluator.
//!
//! Walks the constraint sequence in declared order against the context and
//! reports the first constraint that does not hold. Order is load-bearing:
//! callers must not reorder or parallelize the scan, because which constraint
//! is reported as the failure depends on it.
//!
//! Shape checks from the structural phase are repeated here, so the evaluator
//! is safe to call when structural validation was skipped. A shape violation
//! at this point is an invariant failure, not a classification.

use serde_json::Value;
use thiserror::Error;

/// Malformed input reached the evaluator.
///
/// Propagates to the caller as a hard failure; never converted into a
/// classification result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConstraintShapeError {
    #[error("ConstraintSet is not a sequence")]
    NotASequence,

    #[error("context is not an object")]
    ContextNotAnObject,

    #[error("constraint at index {0} is not an object")]
    NotAnObject(usize),

    #[error("constraint at index {0} is missing field or value")]
    MissingFieldOrValue(usize),
}

/// Verdict of the semantic evaluator: either every constraint holds, or the
/// first failing constraint with its position in the declared sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    Satisfied,
    Failed {
        /// The first constraint that did not hold, as declared.
        constraint: Value,
        /// Its index in the constraint sequence.
        index: usize,
    },
}

/// Evaluate every constraint against the context, in declared order.
///
/// A constraint `{field, value}` holds when `context[field]` exists and is
/// exactly equal to `value` (JSON value equality, no numeric coercion). The
/// scan stops at the first constraint that does not hold.
pub fn evaluate_constraints(
    constraints: &Value,
    context: &Value,
) -> Result<Evaluation, ConstraintShapeError> {
    let constraints = constraints
        .as_array()
        .ok_or(ConstraintShapeError::NotASequence)?;
    let context = context
        .as_object()
        .ok_or(ConstraintShapeError::ContextNotAnObject)?;

    for (index, constraint) in constraints.iter().enumerate() {
        let entry = constraint
            .as_object()
            .ok_or(ConstraintShapeError::NotAnObject(index))?;

        let (field, expected) = match (entry.get("field"), entry.get("value")) {
            (Some(field), Some(expected)) => (field, expected),
            _ => return Err(ConstraintShapeError::MissingFieldOrValue(index)),
        };

        // A non-string field can never name a context key, so it fails as
        // absent rather than erroring.
        let actual = field.as_str().and_then(|name| context.get(name));

        if actual != Some(expected) {
            return Ok(Evaluation::Failed {
                constraint: constraint.clone(),
                index,
            });
        }
    }

    Ok(Evaluation::Satisfied)
}
